use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must be set when SUPABASE_URL is set")]
    MissingForSupabase(&'static str),
}

/// Where contact messages end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactBackend {
    Sqlite {
        database_url: String,
    },
    Supabase {
        url: String,
        service_key: String,
        table: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperSaasSettings {
    pub base_url: String,
    pub account: String,
    pub api_key: String,
    pub schedule_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub frontend_url: String,
    pub static_dir: Option<String>, // built frontend bundle, served with SPA fallback
    pub contact: ContactBackend,
    pub stripe_secret_key: String,
    pub supersaas: SuperSaasSettings,
    pub sentry_dsn: Option<String>,
    pub environment: String, // 'development' locally, anything else in prod
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let contact = match optional("SUPABASE_URL") {
            Some(url) => ContactBackend::Supabase {
                url: url.trim_end_matches('/').to_string(),
                service_key: optional("SUPABASE_SERVICE_KEY")
                    .ok_or(ConfigError::MissingForSupabase("SUPABASE_SERVICE_KEY"))?,
                table: optional("SUPABASE_CONTACT_TABLE")
                    .unwrap_or_else(|| "contact_messages".to_string()),
            },
            None => ContactBackend::Sqlite {
                database_url: optional("DATABASE_URL").unwrap_or_else(|| "database.db".to_string()),
            },
        };

        Ok(Self {
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            frontend_url: required("FRONTEND_URL")?.trim_end_matches('/').to_string(),
            static_dir: optional("STATIC_DIR"),
            contact,
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            supersaas: SuperSaasSettings {
                base_url: optional("SUPERSAAS_BASE_URL")
                    .unwrap_or_else(|| "https://www.supersaas.com".to_string())
                    .trim_end_matches('/')
                    .to_string(),
                account: required("SUPERSAAS_ACCOUNT")?,
                api_key: required("SUPERSAAS_API_KEY")?,
                schedule_id: required("SUPERSAAS_SCHEDULE_ID")?,
            },
            sentry_dsn: optional("SENTRY_DSN"),
            environment: optional("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
pub fn test_settings() -> Settings {
    Settings {
        bind_addr: "127.0.0.1:0".to_string(),
        frontend_url: "https://clearway.test".to_string(),
        static_dir: None,
        contact: ContactBackend::Sqlite {
            database_url: ":memory:".to_string(),
        },
        stripe_secret_key: "sk_test_123".to_string(),
        supersaas: SuperSaasSettings {
            base_url: "http://localhost".to_string(),
            account: "clearway".to_string(),
            api_key: "key".to_string(),
            schedule_id: "42".to_string(),
        },
        sentry_dsn: None,
        environment: "test".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("FRONTEND_URL", "https://clearwaydriving.co.uk/"),
        ("STRIPE_SECRET_KEY", "sk_live_x"),
        ("SUPERSAAS_ACCOUNT", "clearway"),
        ("SUPERSAAS_API_KEY", "abc"),
        ("SUPERSAAS_SCHEDULE_ID", "123"),
    ];

    #[test]
    fn defaults_to_sqlite_store() {
        let settings = Settings::from_lookup(lookup(BASE)).unwrap();
        assert_eq!(
            settings.contact,
            ContactBackend::Sqlite {
                database_url: "database.db".to_string()
            }
        );
        assert_eq!(settings.frontend_url, "https://clearwaydriving.co.uk");
        assert_eq!(settings.bind_addr, "127.0.0.1:3000");
        assert_eq!(settings.supersaas.base_url, "https://www.supersaas.com");
        assert!(settings.is_development());
    }

    #[test]
    fn supabase_url_selects_supabase_store() {
        let mut pairs = BASE.to_vec();
        pairs.push(("SUPABASE_URL", "https://abc.supabase.co/"));
        pairs.push(("SUPABASE_SERVICE_KEY", "service"));
        let settings = Settings::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(
            settings.contact,
            ContactBackend::Supabase {
                url: "https://abc.supabase.co".to_string(),
                service_key: "service".to_string(),
                table: "contact_messages".to_string(),
            }
        );
    }

    #[test]
    fn supabase_without_key_is_rejected() {
        let mut pairs = BASE.to_vec();
        pairs.push(("SUPABASE_URL", "https://abc.supabase.co"));
        assert_eq!(
            Settings::from_lookup(lookup(&pairs)),
            Err(ConfigError::MissingForSupabase("SUPABASE_SERVICE_KEY"))
        );
    }

    #[test]
    fn names_the_missing_variable() {
        let pairs: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "STRIPE_SECRET_KEY")
            .collect();
        let err = Settings::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("STRIPE_SECRET_KEY"));
        assert_eq!(err.to_string(), "STRIPE_SECRET_KEY must be set");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut pairs = BASE.to_vec();
        pairs.retain(|(k, _)| *k != "FRONTEND_URL");
        pairs.push(("FRONTEND_URL", "  "));
        assert_eq!(
            Settings::from_lookup(lookup(&pairs)),
            Err(ConfigError::Missing("FRONTEND_URL"))
        );
    }
}
