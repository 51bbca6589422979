use anyhow::Context;
use appliance_application::error::AppError;
use appliance_application::{RemoteConfig, RemoteControl, TurnOff, TurnOn};
use appliance_domain::{Appliance, Light, PowerState};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG: &str = r#"
slots = 3
history_limit = 10
"#;

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .try_init()
        .context("failed to initialize logging")
}

fn report(lights: &[&Light]) {
    for light in lights {
        println!("   {:<12} {}", light.name(), light.state());
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let living_room = Light::new("living room")?;
    let kitchen = Light::with_state("kitchen", PowerState::On)?;
    let lights = [&living_room, &kitchen];

    let config = RemoteConfig::from_toml_str(CONFIG)?;
    let mut remote = RemoteControl::new(config)?;
    remote.set_command(0, TurnOn::new(&living_room), TurnOff::new(&living_room))?;
    remote.set_command(1, TurnOn::new(&kitchen), TurnOff::new(&kitchen))?;
    println!("{remote}\n");

    // 单步：开 -> 撤销
    remote.press_on(0)?;
    report(&lights);
    remote.undo()?;
    report(&lights);

    // 多步：依次操作后逐一撤销
    remote.press_off(1)?;
    remote.press_on(0)?;
    remote.press_on(1)?;
    report(&lights);
    while let Ok(name) = remote.undo() {
        println!("   undone: {name}");
    }
    report(&lights);

    // 空插槽 -> 返回 EmptySlot 错误
    if let Err(err @ AppError::EmptySlot(_)) = remote.press_on(2) {
        eprintln!("EmptySlot as expected: {err}");
    }

    Ok(())
}
