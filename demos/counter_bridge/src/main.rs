use tether_core::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Counter {
    count: i32,
    step: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The owner hears every local edit through on_commit.
    let counter = SyncedState::with_options(
        Counter { count: 0, step: 1 },
        SyncOptions::new().on_commit(|c: &Counter| {
            log::info!("owner notified: count={}", c.count);
        }),
    );

    // A second, detachable listener.
    let audit = counter.observe(|c| println!("audit: {c:?}"));

    for _ in 0..3 {
        counter.update(|c| c.count += c.step);
    }

    counter.update(|c| c.step = 5);
    counter.update(|c| c.count += c.step);
    println!("after clicks: {:?}", counter.get());

    counter.unobserve(audit);

    // A rejected edit discards the draft and notifies nobody.
    let result = counter.try_update(|c| {
        c.count -= 100;
        if c.count < 0 {
            Err(anyhow::anyhow!("count must stay non-negative"))
        } else {
            Ok(())
        }
    });
    if let Err(err) = result {
        println!("rejected: {err}");
    }

    println!("final: {:?}", counter.get());
    Ok(())
}
