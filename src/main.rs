use clap::Parser;
use listing_router::routing::sitemap::sitemap_entries;
use listing_router::{ContentStore, InMemoryStore, PageRouter, SiteConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolve site requests against a content catalog and print the result as JSON
#[derive(Parser)]
#[command(name = "listing-router", version)]
struct Cli {
    /// Request path to resolve (`/ar/properties?type=villa`), or `sitemap`
    request: String,

    /// JSON fixtures file; the built-in sample catalog is used when omitted
    fixtures: Option<PathBuf>,

    /// Origin for canonical URLs
    #[arg(long, env = "SITE_ORIGIN")]
    origin: Option<String>,

    /// Locale served at unprefixed paths
    #[arg(long, env = "SITE_DEFAULT_LOCALE")]
    default_locale: Option<String>,

    /// Comma-separated list of served locales
    #[arg(long, env = "SITE_LOCALES")]
    locales: Option<String>,

    /// Length of related-content panels
    #[arg(long, env = "SITE_RELATED_LIMIT")]
    related_limit: Option<String>,
}

impl Cli {
    fn site_setting(&self, key: &str) -> Option<String> {
        match key {
            "SITE_ORIGIN" => self.origin.clone(),
            "SITE_DEFAULT_LOCALE" => self.default_locale.clone(),
            "SITE_LOCALES" => self.locales.clone(),
            "SITE_RELATED_LIMIT" => self.related_limit.clone(),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match &cli.fixtures {
        Some(path) => InMemoryStore::from_json_file(path).await?,
        None => {
            info!("No fixtures given, using the built-in sample catalog");
            InMemoryStore::sample()
        }
    };
    let config = SiteConfig::default().with_overrides(|key| cli.site_setting(key));

    info!("🏠 Listing Router ({} store, origin {})", store.source_name(), config.origin);

    let json = if cli.request == "sitemap" {
        let entries = sitemap_entries(&config, &store.properties, &store.projects, &store.posts);
        info!("🗺️  Built {} sitemap entries", entries.len());
        serde_json::to_string_pretty(&entries)?
    } else {
        let router = PageRouter::new(store, config);
        let resolution = router.resolve(&cli.request).await?;
        serde_json::to_string_pretty(&resolution)?
    };

    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_feed_site_config() {
        let cli = Cli::try_parse_from([
            "listing-router",
            "/ar/blog",
            "fixtures.json",
            "--origin",
            "https://staging.erbilhomes.com/",
            "--related-limit",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.fixtures, Some(PathBuf::from("fixtures.json")));
        let config = SiteConfig::default().with_overrides(|key| cli.site_setting(key));
        assert_eq!(config.origin, "https://staging.erbilhomes.com");
        assert_eq!(config.related_limit, 5);
    }

    #[test]
    fn test_request_is_required() {
        assert!(Cli::try_parse_from(["listing-router"]).is_err());
    }
}
