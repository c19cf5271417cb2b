use std::collections::HashSet;

/// A purchasable service with a fixed price in whole USD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

pub const CATALOG: &[Service] = &[
    Service { id: "web-dev", name: "Web Development", price: 400 },
    Service { id: "ui-ux", name: "UI/UX Design", price: 150 },
    Service { id: "e-commerce", name: "E-commerce Solution", price: 600 },
    Service { id: "seo", name: "SEO Optimization", price: 200 },
    Service { id: "logo", name: "Logo Design", price: 50 },
    Service { id: "backlinks", name: "Backlink Building", price: 100 },
];

/// The services a visitor has picked in the quote form. Ids without a
/// catalog entry never enter the set, so the total can always be derived
/// from the catalog alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection(HashSet<&'static str>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str) {
        if let Some(service) = CATALOG.iter().find(|s| s.id == id) {
            if !self.0.remove(service.id) {
                self.0.insert(service.id);
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected ids, in catalog order.
    pub fn ids(&self) -> Vec<&'static str> {
        CATALOG
            .iter()
            .map(|s| s.id)
            .filter(|id| self.0.contains(*id))
            .collect()
    }

    /// Total price of the selection, recomputed from the catalog on every
    /// call rather than kept as a running sum.
    pub fn total(&self) -> u32 {
        CATALOG
            .iter()
            .filter(|s| self.0.contains(s.id))
            .map(|s| s.price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_totals_zero() {
        assert_eq!(Selection::new().total(), 0);
    }

    #[test]
    fn toggle_twice_returns_to_empty() {
        let mut selection = Selection::new();
        selection.toggle("seo");
        assert!(selection.contains("seo"));
        assert_eq!(selection.total(), 200);
        selection.toggle("seo");
        assert!(selection.is_empty());
        assert_eq!(selection.total(), 0);
    }

    #[test]
    fn design_and_logo_cost_two_hundred() {
        let mut selection = Selection::new();
        selection.toggle("ui-ux");
        selection.toggle("logo");
        assert_eq!(selection.total(), 200);
    }

    #[test]
    fn full_catalog_costs_fifteen_hundred() {
        let mut selection = Selection::new();
        for service in CATALOG {
            selection.toggle(service.id);
        }
        assert_eq!(selection.total(), 1500);
    }

    #[test]
    fn total_does_not_depend_on_toggle_order() {
        let mut forward = Selection::new();
        for id in ["web-dev", "seo", "logo"] {
            forward.toggle(id);
        }
        let mut backward = Selection::new();
        for id in ["logo", "seo", "web-dev"] {
            backward.toggle(id);
        }
        assert_eq!(forward, backward);
        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.total(), 650);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut selection = Selection::new();
        selection.toggle("time-travel");
        assert!(selection.is_empty());
        assert_eq!(selection.total(), 0);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for service in CATALOG {
            assert!(seen.insert(service.id), "duplicate catalog id {}", service.id);
        }
    }

    #[test]
    fn ids_come_back_in_catalog_order() {
        let mut selection = Selection::new();
        selection.toggle("backlinks");
        selection.toggle("web-dev");
        assert_eq!(selection.ids(), vec!["web-dev", "backlinks"]);
    }
}
