// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod budget_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod date_model;
        pub(crate) mod organization_model;
        pub(crate) mod record_models;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod category;
        pub(crate) mod computed_cost;
        pub(crate) mod expense_record;
        pub(crate) mod expense_snapshot;
        pub(crate) mod nature;
        pub(crate) mod operation;
        pub(crate) mod organization;
        pub(crate) mod totals;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregator;
        pub(crate) mod costing;
        pub(crate) mod formulas {
            pub(crate) mod consumables;
            pub(crate) mod flight_hours;
            pub(crate) mod food_supplement;
            pub(crate) mod fuel;
            pub(crate) mod fund_advances;
            pub(crate) mod lubricant;
            pub(crate) mod materiel;
            pub(crate) mod operational_funds;
            pub(crate) mod per_diem;
            pub(crate) mod rations;
            pub(crate) mod third_party_services;
            pub(crate) mod tickets;
            pub(crate) mod utilities;
            mod utils;
        }
        pub(crate) mod global_reducer;
        pub(crate) mod normalizer;
        pub(crate) mod role_resolver;
        pub(crate) mod validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod consolidate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod memorandum;
    pub(crate) mod money_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::category::*;
        pub use crate::domain::entities::computed_cost::*;
        pub use crate::domain::entities::expense_record::*;
        pub use crate::domain::entities::expense_snapshot::*;
        pub use crate::domain::entities::nature::*;
        pub use crate::domain::entities::operation::*;
        pub use crate::domain::entities::organization::*;
        pub use crate::domain::entities::totals::*;
    }

    pub mod logic {
        pub use crate::domain::logic::normalizer::normalize_org_name;
        pub use crate::domain::logic::role_resolver::Role;
        pub use crate::domain::logic::validation::validate_records;
    }

    pub mod repositories {
        pub use crate::domain::repositories::records_repository::RecordsRepository;
    }
}
