// Crate-internal.
// ---

pub(crate) mod statements {
    pub(crate) mod consolidated_summary;
    pub(crate) mod organization_demand;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod statements {
        pub use crate::impl_ext::statements::consolidated_summary::*;
        pub use crate::impl_ext::statements::organization_demand::*;
    }
}
