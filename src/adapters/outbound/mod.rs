mod pulsar_admin_client;
mod pulsar_client_factory;

pub use pulsar_admin_client::PulsarAdminClient;
pub use pulsar_client_factory::{FactoryOptions, PulsarClientFactory};
