mod client_factory;

pub use client_factory::ClientFactory;
