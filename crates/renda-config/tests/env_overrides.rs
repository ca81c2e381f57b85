use figment::Jail;
use renda_config::RendaConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("RENDA_API__BASE_URL", "https://api.example.com");
        jail.set_env("RENDA_API__TIMEOUT_SECS", "30");

        let config: RendaConfig = RendaConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        // untouched fields keep their defaults
        assert_eq!(config.api.page_size, 15);
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".renda")?;
        jail.create_file(
            ".renda/config.toml",
            r#"
                [api]
                base_url = "https://from-toml.example.com"
                page_size = 25
            "#,
        )?;
        jail.set_env("RENDA_API__BASE_URL", "https://from-env.example.com");

        let config: RendaConfig = RendaConfig::figment().extract()?;
        assert_eq!(config.api.base_url, "https://from-env.example.com");
        // TOML still wins over defaults for fields env does not set
        assert_eq!(config.api.page_size, 25);
        Ok(())
    });
}
