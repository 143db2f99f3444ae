//! [`Command`] for tracking a phone call conversion.

use common::operations::Emit;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{
        page::{self, Tracked},
        Page,
    },
    Service,
};

use super::Command;

/// [`Command`] for tracking a click on a phone number as a conversion.
///
/// The configured [`ConversionEvent`] is emitted to every configured
/// [`Collector`]. Collectors absent on the page are skipped. Returns the
/// number of [`Collector`]s which received the event.
///
/// [`Collector`]: crate::domain::site::Collector
/// [`ConversionEvent`]: crate::domain::site::ConversionEvent
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackPhoneCall;

impl<P> Command<TrackPhoneCall> for Service<P>
where
    P: Page<Emit<Tracked>, Ok = bool, Err = Traced<page::Error>>,
{
    type Ok = usize;
    type Err = Traced<ExecutionError>;

    fn execute(&self, _: TrackPhoneCall) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let config = self.config();
        let mut tracked = 0;
        for &collector in &config.collectors {
            let emitted = self
                .page()
                .execute(Emit(Tracked {
                    collector,
                    event: config.conversion.clone(),
                }))
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if emitted {
                tracked += 1;
            } else {
                log::debug!("`{collector}` collector is absent, skipping");
            }
        }
        Ok(tracked)
    }
}

/// Error of [`TrackPhoneCall`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Page`] error.
    #[display("`Page` operation failed: {_0}")]
    Page(page::Error),
}

#[cfg(test)]
mod spec {
    use common::{Currency, Handler as _};
    use rust_decimal::Decimal;

    use crate::{
        domain::site::{Collector, ConversionEvent},
        infra::Memory,
        Config, Service,
    };

    use super::TrackPhoneCall;

    #[test]
    fn emits_to_every_collector() {
        let svc = Service::new(
            Config::default(),
            Memory::new()
                .with_collector(Collector::Facebook)
                .with_collector(Collector::Google),
        );

        assert_eq!(svc.execute(TrackPhoneCall).unwrap(), 2);

        let expected = ConversionEvent {
            name: "generate_lead".to_owned(),
            currency: Currency::Usd,
            value: Decimal::from(150),
        };
        assert_eq!(
            svc.page().tracked(Collector::Facebook),
            vec![expected.clone()],
        );
        assert_eq!(svc.page().tracked(Collector::Google), vec![expected]);
    }

    #[test]
    fn skips_absent_collectors() {
        let svc = Service::new(
            Config::default(),
            Memory::new().with_collector(Collector::Google),
        );

        assert_eq!(svc.execute(TrackPhoneCall).unwrap(), 1);
        assert_eq!(svc.page().tracked(Collector::Google).len(), 1);
        assert!(svc.page().tracked(Collector::Facebook).is_empty());

        let svc = Service::new(Config::default(), Memory::new());
        assert_eq!(svc.execute(TrackPhoneCall).unwrap(), 0);
    }

    #[test]
    fn emits_only_to_configured_collectors() {
        let svc = Service::new(
            Config {
                collectors: vec![Collector::Google],
                ..Config::default()
            },
            Memory::new()
                .with_collector(Collector::Facebook)
                .with_collector(Collector::Google),
        );

        assert_eq!(svc.execute(TrackPhoneCall).unwrap(), 1);
        assert!(svc.page().tracked(Collector::Facebook).is_empty());
    }
}
