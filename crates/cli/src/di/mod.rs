use rootwalk_application::ports::DnsResolver;
use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{
    ForwardingResolver, IterativeResolver, NameserverClient, UdpTransport,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything a run needs, wired from one validated [`Config`].
pub struct Services {
    pub client: NameserverClient,
    pub resolve_domain: ResolveDomainUseCase,
}

impl Services {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;

        let transport = UdpTransport::bind(
            Duration::from_millis(resolver_config.query_timeout_ms),
            resolver_config.receive_buffer_size,
        )
        .await?;
        let transport = Arc::new(transport);

        let (client, resolver): (NameserverClient, Arc<dyn DnsResolver>) =
            match resolver_config.forwarder {
                Some(forwarder) => {
                    info!(forwarder = %forwarder, "Forwarding to recursive server");
                    let client = NameserverClient::new(transport, resolver_config.port)
                        .with_recursion_desired();
                    let resolver = ForwardingResolver::new(client.clone(), forwarder);
                    (client, Arc::new(resolver))
                }
                None => {
                    let client = NameserverClient::new(transport, resolver_config.port);
                    let resolver = IterativeResolver::new(client.clone(), resolver_config);
                    (client, Arc::new(resolver))
                }
            };

        Ok(Self {
            client,
            resolve_domain: ResolveDomainUseCase::new(resolver),
        })
    }
}
