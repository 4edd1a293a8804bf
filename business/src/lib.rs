pub mod application {
    pub mod catalog {
        pub mod screen;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notification;
    pub mod catalog {
        pub mod confirmation;
        pub mod view;
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod gateway;
        pub mod model;
        pub mod search;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
