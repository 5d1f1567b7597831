use std::fmt::Display;

/// Named collections of the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customer,
    Plan,
    Subscription,
    Booking,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Customer => "customer",
            Collection::Plan => "plan",
            Collection::Subscription => "subscription",
            Collection::Booking => "booking",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
