use serde::Serialize;

/// One input row in the layout the tool expects.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Liquid Type")]
    liquid_type: &'static str,
    #[serde(rename = "Initial Temperature")]
    initial_temperature: f64,
    #[serde(rename = "Desired Temperature")]
    desired_temperature: f64,
    #[serde(rename = "Ambient Temperature")]
    ambient_temperature: f64,
    #[serde(rename = "Time to Target")]
    time_to_target: Option<f64>,
    #[serde(rename = "Battery Level")]
    battery_level: f64,
    #[serde(rename = "User Preference")]
    user_preference: &'static str,
}

fn main() -> anyhow::Result<()> {
    // (liquid, initial °C, desired °C, preference)
    let liquids = [
        ("Tea", 20.0, 95.0, "Hot"),
        ("Coffee", 18.0, 70.0, "Warm"),
        ("Milk", 4.0, 40.0, "Warm"),
        ("Water", 22.0, 100.0, "Boiling"),
        ("Iced Tea", 24.0, 4.0, "Cold"),
        ("Smoothie", 6.0, -2.0, "Frozen"),
    ];
    // cold, mild and hot rooms hit every ambient bracket
    let ambients = [5.0, 21.0, 35.0];
    let batteries = [100.0, 64.0, 23.0];

    let mut rows = Vec::new();
    for (i, &(liquid, initial, desired, pref)) in liquids.iter().enumerate() {
        for (j, &ambient) in ambients.iter().enumerate() {
            rows.push(SampleRow {
                liquid_type: liquid,
                initial_temperature: initial,
                desired_temperature: desired,
                ambient_temperature: ambient,
                time_to_target: None,
                battery_level: batteries[(i + j) % batteries.len()],
                user_preference: pref,
            });
        }
    }

    let csv_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(csv_path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let json_path = "sample_data.json";
    std::fs::write(json_path, serde_json::to_string_pretty(&rows)?)?;

    println!("Wrote {} rows to {csv_path} and {json_path}", rows.len());
    Ok(())
}
