//! In-memory [`Page`] implementation.

use std::{cell::RefCell, collections::HashMap};

use common::operations::{By, Emit, Hide, Insert, Select, Show, Update};
use tracerr::Traced;

use crate::domain::site::{
    Collector, ConversionEvent, Element, Field, Visibility,
};

use super::{Error, Page, Stored, Tracked, Written};

/// In-memory [`Page`], holding only the elements, fields and collectors it
/// was built with.
#[derive(Debug, Default)]
pub struct Memory {
    /// [`Visibility`] of the present [`Element`]s.
    elements: RefCell<HashMap<Element, Visibility>>,

    /// Values of the present [`Field`]s.
    fields: RefCell<HashMap<Field, String>>,

    /// Local storage entries, if the storage is available.
    storage: Option<RefCell<HashMap<String, String>>>,

    /// Events received by the installed [`Collector`]s.
    collectors: RefCell<HashMap<Collector, Vec<ConversionEvent>>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] page with an available local storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Some(RefCell::default()),
            ..Self::default()
        }
    }

    /// Creates a new empty [`Memory`] page whose local storage rejects every
    /// operation, as browsers do in some private modes.
    #[must_use]
    pub fn without_storage() -> Self {
        Self::default()
    }

    /// Adds the `element` to this [`Memory`] page.
    #[must_use]
    pub fn with_element(
        self,
        element: Element,
        visibility: Visibility,
    ) -> Self {
        drop(self.elements.borrow_mut().insert(element, visibility));
        self
    }

    /// Adds the empty `field` to this [`Memory`] page.
    #[must_use]
    pub fn with_field(self, field: Field) -> Self {
        drop(self.fields.borrow_mut().insert(field, String::new()));
        self
    }

    /// Installs the analytics `collector` on this [`Memory`] page.
    #[must_use]
    pub fn with_collector(self, collector: Collector) -> Self {
        drop(self.collectors.borrow_mut().insert(collector, vec![]));
        self
    }

    /// Returns the [`Visibility`] of the `element`, if it's present.
    #[must_use]
    pub fn visibility(&self, element: Element) -> Option<Visibility> {
        self.elements.borrow().get(&element).copied()
    }

    /// Returns the value of the `field`, if it's present.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<String> {
        self.fields.borrow().get(&field).cloned()
    }

    /// Returns the value stored under the `key`, if any.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.borrow().get(key).cloned()
    }

    /// Returns the events the `collector` received.
    #[must_use]
    pub fn tracked(&self, collector: Collector) -> Vec<ConversionEvent> {
        self.collectors
            .borrow()
            .get(&collector)
            .cloned()
            .unwrap_or_default()
    }

    /// Sets the [`Visibility`] of the `element`, if it's present.
    fn display(&self, element: Element, visibility: Visibility) -> bool {
        self.elements
            .borrow_mut()
            .get_mut(&element)
            .map(|v| *v = visibility)
            .is_some()
    }

    /// Returns the local storage, if it's available.
    fn storage(
        &self,
    ) -> Result<&RefCell<HashMap<String, String>>, Traced<Error>> {
        self.storage.as_ref().ok_or_else(|| {
            tracerr::new!(Error::Storage("local storage is disabled".into()))
        })
    }
}

impl Page<Show<Element>> for Memory {
    type Ok = bool;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Show(element): Show<Element>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.display(element, Visibility::Shown))
    }
}

impl Page<Hide<Element>> for Memory {
    type Ok = bool;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Hide(element): Hide<Element>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.display(element, Visibility::Hidden))
    }
}

impl Page<Update<Written>> for Memory {
    type Ok = bool;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Update(Written { field, value }): Update<Written>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .fields
            .borrow_mut()
            .get_mut(&field)
            .map(|v| *v = value)
            .is_some())
    }
}

impl<'k> Page<Select<By<Option<String>, &'k str>>> for Memory {
    type Ok = Option<String>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<String>, &'k str>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.storage()?.borrow().get(by.into_inner()).cloned())
    }
}

impl Page<Insert<Stored>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    fn execute(
        &self,
        Insert(Stored { key, value }): Insert<Stored>,
    ) -> Result<Self::Ok, Self::Err> {
        drop(self.storage()?.borrow_mut().insert(key.to_owned(), value));
        Ok(())
    }
}

impl Page<Emit<Tracked>> for Memory {
    type Ok = bool;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Emit(Tracked { collector, event }): Emit<Tracked>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self
            .collectors
            .borrow_mut()
            .get_mut(&collector)
            .map(|events| events.push(event))
            .is_some())
    }
}
