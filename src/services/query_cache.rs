//! Invalidation of fetched screen data after mutations.
//!
//! Each screen that loads remote data tracks the trigger for its key inside
//! its fetch effect; a successful mutation notifies the keys it affects.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKey {
    ServicesList,
    ServiceDetail,
    DashboardOverview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
    Pause,
    Resume,
}

impl Mutation {
    /// Keys whose data is stale after this mutation succeeds.
    pub fn invalidates(&self) -> &'static [QueryKey] {
        match self {
            Mutation::Create => &[QueryKey::ServicesList, QueryKey::DashboardOverview],
            Mutation::Update | Mutation::Delete | Mutation::Pause | Mutation::Resume => &[
                QueryKey::ServicesList,
                QueryKey::ServiceDetail,
                QueryKey::DashboardOverview,
            ],
        }
    }
}

#[derive(Clone, Copy)]
pub struct QueryInvalidation {
    services_list: Trigger,
    service_detail: Trigger,
    dashboard: Trigger,
}

impl QueryInvalidation {
    pub fn new() -> Self {
        Self {
            services_list: Trigger::new(),
            service_detail: Trigger::new(),
            dashboard: Trigger::new(),
        }
    }

    fn trigger(&self, key: QueryKey) -> Trigger {
        match key {
            QueryKey::ServicesList => self.services_list,
            QueryKey::ServiceDetail => self.service_detail,
            QueryKey::DashboardOverview => self.dashboard,
        }
    }

    /// Subscribe the running effect to `key`.
    pub fn track(&self, key: QueryKey) {
        self.trigger(key).track();
    }

    pub fn invalidate(&self, mutation: Mutation) {
        for key in mutation.invalidates() {
            log::debug!("Invalidating {:?} after {:?}", key, mutation);
            self.trigger(*key).notify();
        }
    }

    /// Manual refresh from the top bar.
    pub fn invalidate_all(&self) {
        log::debug!("Invalidating all queries");
        self.services_list.notify();
        self.service_detail.notify();
        self.dashboard.notify();
    }
}

impl Default for QueryInvalidation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_invalidation() {
    provide_context(QueryInvalidation::new());
}

pub fn use_query_invalidation() -> QueryInvalidation {
    expect_context::<QueryInvalidation>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_skips_detail() {
        let keys = Mutation::Create.invalidates();
        assert!(keys.contains(&QueryKey::ServicesList));
        assert!(keys.contains(&QueryKey::DashboardOverview));
        assert!(!keys.contains(&QueryKey::ServiceDetail));
    }

    #[test]
    fn test_other_mutations_hit_all_keys() {
        for mutation in [Mutation::Update, Mutation::Delete, Mutation::Pause, Mutation::Resume] {
            assert_eq!(mutation.invalidates().len(), 3, "{mutation:?}");
        }
    }
}
