//! [`Query`] for estimating a quote line.

use derive_more::Debug;
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        offering::{Attributes, Configuration},
        quote::{self, AdHocUnits, Context, Priced},
    },
    Service,
};

use super::Query;

/// [`Query`] for estimating a [`Priced`] quote line out of raw form values.
///
/// Inputs are validated in order (service [`Attributes`], guests, hours,
/// assumed base hours), stopping on the first invalid one.
#[derive(Clone, Copy, Debug)]
pub struct EstimateLine<'a> {
    /// Markup [`Attributes`] of the quoted service, if it's configured at all.
    pub attributes: Option<&'a Attributes>,

    /// Raw number of guests.
    pub guests: Option<Decimal>,

    /// Raw event duration, in hours.
    pub hours: Option<Decimal>,

    /// Raw duration the suggested prices were calibrated against.
    pub assumed_base_hours: Option<Decimal>,

    /// [`AdHocUnits`] resolver, if the page provides one.
    #[debug(skip)]
    pub resolver: Option<&'a dyn AdHocUnits>,
}

impl<P> Query<EstimateLine<'_>> for Service<P> {
    type Ok = Priced;
    type Err = Traced<quote::Error>;

    fn execute(
        &self,
        query: EstimateLine<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let EstimateLine {
            attributes,
            guests,
            hours,
            assumed_base_hours,
            resolver,
        } = query;

        let estimated = attributes
            .ok_or(quote::Error::MissingConfiguration)
            .and_then(|attrs| {
                let config = Configuration::from_attributes(attrs)?;
                let ctx = Context::new(guests, hours, assumed_base_hours)?;
                let line = quote::estimate(&config, &ctx, resolver)?;
                Ok(Priced::new(config.id, line))
            });

        estimated.map_err(|e| {
            log::warn!(
                fields = ?e.fields(),
                "cannot estimate quote line: {e}",
            );
            tracerr::new!(e)
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Handler as _;
    use rust_decimal::Decimal;

    use crate::{
        domain::{
            offering::{Attributes, Id, Selector},
            quote::{Error, Priced},
            Line,
        },
        infra::Memory,
        Config, Service,
    };

    use super::EstimateLine;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn service() -> Service<Memory> {
        Service::new(Config::default(), Memory::new())
    }

    fn attributes(unit_type: &str) -> Attributes {
        [
            ("service-id", "7"),
            ("suggested-price", "100"),
            ("unit-type-id", unit_type),
            ("service-type-id", "1"),
            ("guest-ratio", "10"),
            ("selector", ".extra-bars"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    fn query(attrs: Option<&Attributes>) -> EstimateLine<'_> {
        EstimateLine {
            attributes: attrs,
            guests: Some(decimal("80")),
            hours: Some(decimal("6")),
            assumed_base_hours: Some(decimal("4")),
            resolver: None,
        }
    }

    #[test]
    fn estimates_per_person_line() {
        let attrs = attributes("1");

        let priced = service().execute(query(Some(&attrs))).unwrap();

        assert_eq!(
            priced,
            Priced::new(
                Id::new(7).unwrap(),
                Line {
                    adjusted_price: decimal("150"),
                    units: decimal("80"),
                },
            ),
        );
    }

    #[test]
    fn resolves_ad_hoc_units() {
        let attrs = attributes("5");
        let resolver = |id: Id, selector: &Selector| {
            let expected = Id::new(7).unwrap();
            if id == expected && selector.as_str() == ".extra-bars" {
                decimal("2")
            } else {
                Decimal::ZERO
            }
        };

        let priced = service()
            .execute(EstimateLine {
                resolver: Some(&resolver),
                ..query(Some(&attrs))
            })
            .unwrap();

        assert_eq!(priced.units, decimal("2"));
        assert_eq!(priced.price_per_unit, decimal("100"));
    }

    #[test]
    fn fails_without_configuration() {
        let err = service().execute(query(None)).unwrap_err();

        assert_eq!(err.as_ref(), &Error::MissingConfiguration);
    }

    #[test]
    fn attributes_are_validated_before_context() {
        let mut attrs = attributes("1");
        drop(attrs.remove("suggested-price"));

        let err = service()
            .execute(EstimateLine {
                guests: None,
                ..query(Some(&attrs))
            })
            .unwrap_err();

        assert_eq!(err.as_ref().fields(), vec!["suggested-price"]);
    }

    #[test]
    fn guests_are_validated_before_hours() {
        let attrs = attributes("1");

        let err = service()
            .execute(EstimateLine {
                guests: Some(decimal("10.5")),
                hours: None,
                ..query(Some(&attrs))
            })
            .unwrap_err();

        assert_eq!(
            err.as_ref(),
            &Error::InvalidGuests(Some(decimal("10.5"))),
        );
    }

    #[test]
    fn unknown_unit_type_fails_after_context() {
        let attrs = attributes("3");

        let err = service()
            .execute(EstimateLine {
                hours: Some(Decimal::ZERO),
                ..query(Some(&attrs))
            })
            .unwrap_err();
        assert_eq!(err.as_ref(), &Error::InvalidHours(Some(Decimal::ZERO)));

        let err = service().execute(query(Some(&attrs))).unwrap_err();
        assert!(matches!(err.as_ref(), Error::UnknownUnitType(_)));
    }
}
