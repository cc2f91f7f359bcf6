use car_service::utils::{logger, validation::Validate};
use car_service::{CliConfig, FleetConfig, VehicleStatus};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Loading fleet from: {}", config.config);

    // 載入並驗證配置
    let fleet = match FleetConfig::from_file(&config.config).and_then(|fleet| {
        fleet.validate()?;
        Ok(fleet)
    }) {
        Ok(fleet) => fleet,
        Err(e) => {
            tracing::error!("❌ Failed to load fleet '{}': {}", config.config, e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let today = chrono::Local::now().date_naive();
    let statuses = match fleet.evaluate(today) {
        Ok(statuses) => statuses,
        Err(e) => {
            tracing::error!("❌ Fleet evaluation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let due = statuses.iter().filter(|s| s.report.needs_service).count();
    tracing::info!(
        "✅ Checked {} vehicles in {}, {} due for service",
        statuses.len(),
        fleet.name(),
        due
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        for status in &statuses {
            println!("{}", render_line(status));
        }
    }

    Ok(())
}

fn render_line(status: &VehicleStatus) -> String {
    if status.report.needs_service {
        format!(
            "🔧 {} ({}): service due [{}]",
            status.name,
            status.model,
            status.report.due_components().join(", ")
        )
    } else {
        format!("✅ {} ({}): ok", status.name, status.model)
    }
}
