use clap::Parser;
use flight_booking::utils::error::ErrorSeverity;
use flight_booking::utils::{logger, validation::Validate};
use flight_booking::{CliConfig, ItineraryConfig, ItinerarySummary};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting flight-booking CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = ItineraryConfig::from_file(&config.itinerary).and_then(|itinerary_config| {
        let itinerary = itinerary_config.build()?;
        let summary = ItinerarySummary::new(itinerary_config.name(), &itinerary);
        match config.format.as_str() {
            "json" => summary.to_json(),
            _ => Ok(summary.to_text()),
        }
    });

    match result {
        Ok(output) => {
            tracing::info!("✅ Itinerary {} is valid", config.itinerary);
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Itinerary check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
