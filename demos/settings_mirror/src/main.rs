use serde::{Deserialize, Serialize};
use tether_core::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    volume: u8,
    theme: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = SyncedState::with_options(
        Settings {
            volume: 40,
            theme: "light".into(),
        },
        SyncOptions::new()
            .mirror_with(|s: &mut Settings| s.volume = s.volume.min(100))
            .sync_if(|s: &Settings| !s.theme.is_empty())
            .on_commit(|s: &Settings| log::info!("user changed settings: {s:?}")),
    );
    println!("start: {:?}", settings.get());

    // Snapshots arriving from the owning side, e.g. a profile service.
    let payloads = [
        r#"{ "volume": 70, "theme": "dark" }"#,
        r#"{ "volume": 70, "theme": "dark" }"#,
        r#"{ "volume": 180, "theme": "dark" }"#,
        r#"{ "volume": 55, "theme": "" }"#,
    ];

    for payload in payloads {
        let snapshot: Settings = serde_json::from_str(payload)?;
        settings.source_changed(&snapshot);
        println!("after {payload}: {:?}", settings.get());
    }

    // A local edit commits and notifies; the snapshots above never did.
    settings.update(|s| s.theme = "solarized".into());
    println!("local edit: {:?}", settings.get());

    // Detach from the remote side entirely; snapshots stop landing.
    settings.set_sync_mode(SyncMode::Off);
    let snapshot: Settings = serde_json::from_str(r#"{ "volume": 10, "theme": "dark" }"#)?;
    settings.source_changed(&snapshot);
    println!("detached: {:?}", settings.get());

    let saved = serde_json::to_string(&settings.get())?;
    println!("persisted: {saved}");
    Ok(())
}
