pub mod owner_server;
