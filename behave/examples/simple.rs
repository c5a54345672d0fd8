use behave::{
    BehaviorTree, BehaviorTreePolicy, Node, StateWatcher, Status, TraceObserver, decorators,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run arguments of the patrol tree
#[derive(Debug, Default)]
struct Guard {
    position: u32,
    alarm: bool,
    log: Vec<String>,
}

fn walk_to(target: u32) -> Node<Guard> {
    Node::generator(move |_: &mut Guard| {
        move |guard: &mut Guard| {
            if guard.position >= target {
                return None;
            }
            guard.position += 1;
            guard.log.push(format!("walked to {}", guard.position));
            Some(Status::Running)
        }
    })
    .named(format!("walk_to({target})"))
}

fn main() {
    let _ignore = tracing_subscriber::Registry::default()
        .with(tracing_forest::ForestLayer::default())
        .try_init();

    let alarm = Node::condition(|guard: &mut Guard| guard.alarm).named("alarm?");
    let raise = Node::action(|guard: &mut Guard| guard.log.push("raising the alarm".into()))
        .named("raise")
        .with_desc("Tell everyone");
    let patrol = walk_to(3)
        .then(Node::action(|guard: &mut Guard| {
            guard.alarm = true;
            Status::Success
        }))
        .decorate(&decorators::always_succeed());

    let behavior = alarm.then(raise).or(patrol);

    let (watcher, state) = StateWatcher::new(&behavior);
    let mut bt = BehaviorTree::debug(
        behavior.clone(),
        BehaviorTreePolicy::ReloadOnCompletion,
        watcher,
        Guard::default(),
    );

    for _ in 0..6 {
        match bt.tick() {
            Ok(status) => println!("Tick: {status}"),
            Err(err) => {
                eprintln!("Tree error: {err}");
                return;
            }
        }
    }

    let snapshot = serde_json::to_string_pretty(&state.snapshot()).unwrap_or_default();
    println!("State:\n{snapshot}");
    println!("Log: {:#?}", bt.args().log);

    // Same tree, traced instead of watched
    let mut bt = BehaviorTree::debug(
        behavior,
        BehaviorTreePolicy::RetainOnCompletion,
        TraceObserver::default(),
        Guard {
            alarm: true,
            ..Default::default()
        },
    );
    if let Ok(status) = bt.tick() {
        println!("Alarmed guard: {status}");
    }
}
