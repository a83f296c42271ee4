pub mod application {
    pub mod product {
        pub mod lookup;
        pub mod stages;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod lookup;
        }
    }
}
