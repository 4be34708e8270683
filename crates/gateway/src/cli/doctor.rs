use std::time::Duration;

use wa_domain::config::{Config, ConfigSeverity};

/// Run all diagnostic checks and print a summary.
///
/// Returns `Ok(true)` when every check passes, `Ok(false)` when at least
/// one check failed.
pub async fn run(config: &Config, config_path: &str) -> anyhow::Result<bool> {
    println!("watch-actions doctor");
    println!("====================\n");

    let mut all_passed = true;

    // 1. Config file
    check_config_file(config_path, &mut all_passed);

    // 2. Config validation
    check_config_validation(config, &mut all_passed);

    // 3. Price/rating patterns
    check_extractor(config, &mut all_passed);

    // 4. Catalog API connectivity
    check_catalog(config, &mut all_passed).await;

    // Summary
    println!();
    if all_passed {
        println!("All checks passed.");
    } else {
        println!("Some checks failed. Review the output above.");
    }

    Ok(all_passed)
}

// ── Individual checks ─────────────────────────────────────────────────

fn check_config_file(config_path: &str, all_passed: &mut bool) {
    let exists = std::path::Path::new(config_path).exists();
    print_check(
        "Config file exists",
        exists,
        if exists {
            config_path.to_owned()
        } else {
            format!("{config_path} not found (using defaults)")
        },
    );
    if !exists {
        *all_passed = false;
    }
}

fn check_config_validation(config: &Config, all_passed: &mut bool) {
    let issues = config.validate();
    let error_count = issues
        .iter()
        .filter(|e| e.severity == ConfigSeverity::Error)
        .count();

    if issues.is_empty() {
        print_check("Config validation", true, "no issues".into());
    } else {
        print_check(
            "Config validation",
            error_count == 0,
            format!("{} issue(s) ({} error(s))", issues.len(), error_count),
        );
        for issue in &issues {
            println!("      {issue}");
        }
        if error_count > 0 {
            *all_passed = false;
        }
    }
}

fn check_extractor(config: &Config, all_passed: &mut bool) {
    match wa_extract::Extractor::new(&config.extraction) {
        Ok(ex) => {
            let probe = ex.parse_price("dưới 1 triệu");
            let ok = probe.map(|p| (p.min, p.max)) == Some((0, Some(1_000_000)));
            print_check(
                "Price parser",
                ok,
                if ok {
                    "\"dưới 1 triệu\" -> 0:1000000".into()
                } else {
                    format!("\"dưới 1 triệu\" -> {probe:?}")
                },
            );
            if !ok {
                *all_passed = false;
            }
        }
        Err(e) => {
            print_check("Price parser", false, e.to_string());
            *all_passed = false;
        }
    }
}

async fn check_catalog(config: &Config, all_passed: &mut bool) {
    let url = &config.catalog.base_url;
    let timeout = Duration::from_millis(config.catalog.timeout_ms.min(5_000));
    let reachable = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client.get(url).send().await.is_ok(),
        Err(_) => false,
    };

    print_check(
        "Catalog API reachable",
        reachable,
        if reachable {
            url.clone()
        } else {
            format!("{url} (unreachable)")
        },
    );

    if !reachable {
        *all_passed = false;
    }
}

// ── Formatting helper ─────────────────────────────────────────────────

fn print_check(name: &str, passed: bool, detail: String) {
    let status = if passed { "PASS" } else { "FAIL" };
    println!("  [{status}] {name}: {detail}");
}
