mod category;
mod channel;
mod server;
