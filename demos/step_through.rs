//! Example: Step through a combination trace on an in-memory report.
//!
//! This example demonstrates how to:
//! 1. Load the data object a report host injects
//! 2. Attach a player to the report page
//! 3. Drive it through the simulate/next/prev controls
//! 4. Verify the trace can be stepped back and forth losslessly
//!
//! Run with: cargo run --example step_through

use implicant_replay::*;

const HOST_DATA: &str = r#"{
    "combinations": [
        {"combined": "00-", "left": "000", "right": "001"},
        {"combined": "0-0", "left": "000", "right": "010"},
        {"combined": "0-1", "left": "001", "right": "011"},
        {"combined": "0--", "left": "00-", "right": "01-"}
    ],
    "translations": {
        "simulate": "Simulate",
        "stopSimulation": "Stop simulation",
        "prevStep": "Previous",
        "nextStep": "Next"
    }
}"#;

fn print_page(page: &ReportPage) {
    for (id, element) in page.elements().filter(|(id, _)| id.starts_with("b_")) {
        println!(
            "  {id:<6} {:<8} {}",
            element.visibility.as_css(),
            element.emphasis.color()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = HostData::from_json_str(HOST_DATA)?;
    let config = PlayerConfig::default();

    println!("Verifying trace...");
    verify_trace(ReportPage::for_trace, &data.combinations, &config)?;

    let mut page = ReportPage::for_trace(&data.combinations, &config);
    let mut player = Player::from_host_data(data, config);
    if !player.attach(&mut page) {
        println!("Nothing to simulate");
        return Ok(());
    }

    player.activate(&mut page, "fpi-simulate");
    while player.activate(&mut page, "fpi-next") {
        println!("Step {}/{}:", player.cursor(), player.len());
        print_page(&page);
    }

    player.activate(&mut page, "fpi-prev");
    println!("Back to step {}:", player.cursor());
    print_page(&page);

    player.activate(&mut page, "fpi-simulate");
    println!("Stopped ({}):", player.mode());
    print_page(&page);

    Ok(())
}
