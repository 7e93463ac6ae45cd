pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_USERNAME},
        test_setup_with_fleet_tables, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}

/// Create a [`TestContext`] with tables for the provided entities.
///
/// Entities must be listed parents first so foreign keys resolve.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Create a [`TestContext`] with every fleet scheduler table.
#[macro_export]
macro_rules! test_setup_with_fleet_tables {
    () => {{
        $crate::TestBuilder::new().with_fleet_tables().build().await
    }};
}
