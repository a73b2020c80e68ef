/// Defines a table schema: a named sled tree with typed keys and values.
macro_rules! define_table {
    ($(#[$docs:meta])+ ( $table_name:ident ) $key:ty => $value:ty) => {
        $(#[$docs])+
        ///
        #[doc = concat!("Takes [`", stringify!($key), "`] as a key and returns [`", stringify!($value), "`]")]
        #[derive(Clone, Copy, Debug, Default)]
        pub(crate) struct $table_name;

        impl $crate::schema::Schema for $table_name {
            const TREE_NAME: &'static str = ::core::stringify!($table_name);
            type Key = $key;
            type Value = $value;
        }
    };
}

/// Defines a database struct holding one typed tree per schema.
macro_rules! define_sled_database {
    (
        $(#[$meta:meta])*
        pub struct $db_name:ident {
            $($vis:vis $field:ident: $schema:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $db_name {
            $(
                $vis $field: $crate::schema::SledTree<$schema>,
            )*
            db: sled::Db,
            config: $crate::SledDbConfig,
        }

        impl $db_name {
            pub fn new(db: sled::Db, config: $crate::SledDbConfig) -> rollup_db_types::DbResult<Self> {
                Ok(Self {
                    $(
                        $field: $crate::schema::SledTree::open(&db)?,
                    )*
                    db,
                    config,
                })
            }

            /// Flushes dirty buffers to disk, returning the number of bytes written.
            pub fn flush(&self) -> rollup_db_types::DbResult<usize> {
                Ok(self.db.flush()?)
            }

            fn flush_if_configured(&self) -> rollup_db_types::DbResult<()> {
                if self.config.flush_on_commit {
                    self.db.flush()?;
                }
                Ok(())
            }
        }
    };
}

#[cfg(test)]
macro_rules! sled_db_test_setup {
    ($db_type:ty, $test_macro:ident) => {
        fn setup_db() -> $db_type {
            let db = sled::Config::new().temporary(true).open().unwrap();
            let config = $crate::SledDbConfig::test();
            <$db_type>::new(db, config).unwrap()
        }

        $test_macro!(setup_db());
    };
}
