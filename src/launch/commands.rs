use crate::docker::ContainerCommand;

use super::settings::LaunchConfig;

/// Build the `docker run` command for the collector.
///
/// The container runs attached and is removed on exit. Credentials are
/// forwarded by name with `-e`; their values travel in `envs`.
pub fn collector_command(cfg: &LaunchConfig) -> ContainerCommand {
    let mut args: Vec<String> = vec![
        "run".into(),
        "--rm".into(),
        "--name".into(),
        cfg.container_name.clone(),
    ];

    for port in &cfg.ports {
        args.extend(["-p".into(), port.to_string()]);
    }

    args.extend([
        "--mount".into(),
        format!(
            "type=bind,source={},target={},readonly",
            cfg.collector_config.display(),
            cfg.config_target
        ),
    ]);

    let envs: Vec<(String, String)> = cfg
        .credentials
        .env_vars()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, _) in &envs {
        args.extend(["-e".into(), key.clone()]);
    }

    args.extend([cfg.image.clone(), format!("--config={}", cfg.config_target)]);

    ContainerCommand { args, envs }
}
