//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Smite Proxy                                       ║
║     Signed passthrough for the Hi-Rez Smite API       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(listen_addr: &str, base_url: &str, dev_id: &str, session: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Listen: {}", listen_addr);
    println!("  Upstream: {}", base_url);
    println!("  Developer ID: {}", dev_id);
    println!(
        "  Session: {}",
        if session { "create at startup" } else { "disabled" }
    );
    println!();
}
