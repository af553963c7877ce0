pub mod application {
    pub mod item {
        pub mod add;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
        mod wishlist_guard;
    }
    pub mod wishlist {
        pub mod clear;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_customer;
        pub mod get_by_id;
        pub mod update;
        mod embed_items;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod clear;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_customer;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
mod test_support;
