//! Marketing site page definitions.

use common::{Currency, Percent};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use url::Url;

/// Element of a page toggled by the site scripts.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Element {
    /// Header floating over the page once it's scrolled down.
    #[display("floatingHeader")]
    FloatingHeader,

    /// Overlay with the quote request form.
    #[display("formModalContainer")]
    QuoteForm,

    /// Promotional pop-up overlay.
    #[display("popUpModalOverlay")]
    PopUp,
}

/// Form field written by the site scripts.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Field {
    /// Hidden field recording which control opened the quote form.
    #[display("button_clicked")]
    ButtonClicked,
}

/// Visibility of an [`Element`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Visibility {
    /// [`Element`] is displayed.
    Shown,

    /// [`Element`] is not displayed.
    Hidden,
}

/// Scroll position of a page, in pixels.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Scroll {
    /// Distance scrolled from the top of the page.
    pub top: Decimal,

    /// Total height of the page content.
    pub height: Decimal,

    /// Height of the viewport.
    pub client_height: Decimal,
}

impl Scroll {
    /// Returns which [`Percent`] of the scrollable distance is scrolled.
    ///
    /// [`None`] is returned if the page is not scrollable at all, or its
    /// dimensions overflow.
    #[must_use]
    pub fn percentage(&self) -> Option<Percent> {
        Percent::of(self.top, self.height.checked_sub(self.client_height)?)
    }
}

/// Returns the [`Visibility`] of the floating header for the provided
/// [`Scroll`] position.
///
/// The header is shown once the scrolled [`Percent`] exceeds the `threshold`.
#[must_use]
pub fn header_visibility(scroll: &Scroll, threshold: Percent) -> Visibility {
    match scroll.percentage() {
        Some(scrolled) if scrolled > threshold => Visibility::Shown,
        Some(_) | None => Visibility::Hidden,
    }
}

/// External analytics collector receiving conversion events.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Collector {
    /// Meta pixel.
    #[display("facebook")]
    Facebook,

    /// Google tag.
    #[display("google")]
    Google,
}

/// Conversion event emitted when a phone number is clicked.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct ConversionEvent {
    /// Name of the event.
    #[default("generate_lead".to_owned())]
    pub name: String,

    /// [`Currency`] of the event value.
    #[default(Currency::Usd)]
    pub currency: Currency,

    /// Value of a single conversion.
    #[default(Decimal::from(150))]
    pub value: Decimal,
}

/// Record of how a visitor first landed on the site.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// URL of the first page visited.
    pub landing_page: Option<String>,

    /// URL the visitor came from.
    pub referrer: Option<String>,
}

impl Visitor {
    /// Storage key the [`Visitor`] is persisted under.
    pub const KEY: &'static str = "user";
}

/// Appends the querystring of the current `page` to the `link`, so tracking
/// parameters survive the navigation.
///
/// [`None`] is returned when the `link` should stay untouched: the `page` has
/// no querystring, its path contains the `excluded` segment, or the `link`
/// leads to another site.
#[must_use]
pub fn merge_querystring(
    page: &Url,
    link: &Url,
    excluded: &str,
) -> Option<Url> {
    let query = page.query().filter(|q| !q.is_empty())?;
    if !excluded.is_empty() && page.path().contains(excluded) {
        return None;
    }
    if page.origin() != link.origin() {
        return None;
    }

    let mut merged = link.clone();
    match link.query().filter(|q| !q.is_empty()) {
        Some(own) => merged.set_query(Some(&format!("{own}&{query}"))),
        None => merged.set_query(Some(query)),
    }
    Some(merged)
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;
    use url::Url;

    use super::{
        header_visibility, merge_querystring, Scroll, Visibility, Visitor,
    };

    fn scroll(top: u32) -> Scroll {
        Scroll {
            top: Decimal::from(top),
            height: Decimal::from(2_200),
            client_height: Decimal::from(200),
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn header_shown_past_threshold() {
        let threshold = Percent::new(Decimal::from(5)).unwrap();

        assert_eq!(
            header_visibility(&scroll(0), threshold),
            Visibility::Hidden,
        );
        // Exactly 5% is not past the threshold.
        assert_eq!(
            header_visibility(&scroll(100), threshold),
            Visibility::Hidden,
        );
        assert_eq!(
            header_visibility(&scroll(101), threshold),
            Visibility::Shown,
        );
    }

    #[test]
    fn header_hidden_on_unscrollable_page() {
        let threshold = Percent::new(Decimal::from(5)).unwrap();
        let page = Scroll {
            top: Decimal::ZERO,
            height: Decimal::from(600),
            client_height: Decimal::from(800),
        };

        assert_eq!(header_visibility(&page, threshold), Visibility::Hidden);
    }

    #[test]
    fn header_hidden_on_overflowing_dimensions() {
        let threshold = Percent::new(Decimal::from(5)).unwrap();
        let huge_top = Scroll {
            top: Decimal::MAX,
            height: Decimal::from(2),
            client_height: Decimal::ONE,
        };
        let huge_height = Scroll {
            top: Decimal::ONE,
            height: Decimal::MAX,
            client_height: Decimal::MIN,
        };

        assert_eq!(huge_top.percentage(), None);
        assert_eq!(
            header_visibility(&huge_top, threshold),
            Visibility::Hidden,
        );
        assert_eq!(huge_height.percentage(), None);
        assert_eq!(
            header_visibility(&huge_height, threshold),
            Visibility::Hidden,
        );
    }

    #[test]
    fn appends_page_querystring() {
        let page = url("https://example.com/?utm_source=google&gclid=abc");

        assert_eq!(
            merge_querystring(&page, &url("https://example.com/faq"), "crm"),
            Some(url("https://example.com/faq?utm_source=google&gclid=abc")),
        );
        assert_eq!(
            merge_querystring(
                &page,
                &url("https://example.com/quote?package=full"),
                "crm",
            ),
            Some(url(
                "https://example.com/quote?package=full&utm_source=google&gclid=abc",
            )),
        );
    }

    #[test]
    fn leaves_links_untouched() {
        let link = url("https://example.com/faq");

        assert_eq!(
            merge_querystring(&url("https://example.com/"), &link, "crm"),
            None,
        );
        assert_eq!(
            merge_querystring(
                &url("https://example.com/crm/leads?page=2"),
                &link,
                "crm",
            ),
            None,
        );
        assert_eq!(
            merge_querystring(
                &url("https://example.com/?utm_source=google"),
                &url("https://other.com/"),
                "crm",
            ),
            None,
        );
    }

    #[test]
    fn visitor_serializes_camel_case() {
        let visitor = Visitor {
            landing_page: Some("https://example.com/?gclid=abc".to_owned()),
            referrer: None,
        };

        assert_eq!(
            serde_json::to_string(&visitor).unwrap(),
            r#"{"landingPage":"https://example.com/?gclid=abc","referrer":null}"#,
        );
    }
}
