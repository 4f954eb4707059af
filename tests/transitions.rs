use devhub::app::{handle_event, AppState, Event};
use devhub::transition::{
    Completion, PhaseTicket, TransitionCoordinator, TransitionEffect, TransitionPhase,
};
use devhub::{initialize, Action, Config, RouteKey};

fn key(path: &str) -> RouteKey {
    RouteKey::from(path)
}

fn navigate(state: &mut AppState, path: &str) -> Vec<Action> {
    let now_ms = state.clock_ms;
    handle_event(state, &Event::Navigate { path: path.to_string(), now_ms }).1
}

fn tick(state: &mut AppState, now_ms: u64) -> Vec<Action> {
    handle_event(state, &Event::Tick { now_ms }).1
}

fn complete(state: &mut AppState, ticket: PhaseTicket) -> (bool, Vec<Action>) {
    let now_ms = state.clock_ms;
    handle_event(state, &Event::PhaseComplete { ticket, now_ms })
}

fn entering_routes(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::StartAnimation {
                route,
                phase: TransitionPhase::Entering,
                ..
            } => Some(route.to_string()),
            _ => None,
        })
        .collect()
}

fn assert_exclusive(state: &AppState) {
    let views = state.transitions.views();
    let active = views
        .iter()
        .filter(|(_, phase)| *phase == TransitionPhase::Active)
        .count();
    assert!(active <= 1, "more than one active view: {views:?}");
    assert!(state.pages.len() <= 1, "more than one mounted page");
    for (route, _) in &views {
        assert!(state.pages.contains_key(route), "mounted view without page state");
    }
}

#[test]
fn never_two_active_views_under_rapid_navigation() {
    let mut state = initialize(&Config::default());
    let paths = ["/developers", "/projects", "/", "/community", "/profile/3", "/about", "/contact"];

    let mut now = 0;
    for (step, path) in paths.iter().cycle().take(40).enumerate() {
        navigate(&mut state, path);
        assert_exclusive(&state);

        now += [50, 150, 400, 250][step % 4];
        tick(&mut state, now);
        assert_exclusive(&state);
    }

    tick(&mut state, now + 1_000);
    tick(&mut state, now + 2_000);
    assert!(state.transitions.is_idle());
    assert_exclusive(&state);
}

#[test]
fn last_route_wins_while_exiting() {
    let mut state = initialize(&Config::default());

    navigate(&mut state, "/developers");
    navigate(&mut state, "/projects");

    let mut entered = vec![];
    for now in [100, 400, 500, 800, 1_200] {
        entered.extend(entering_routes(&tick(&mut state, now)));
    }

    assert_eq!(entered, vec!["/projects".to_string()]);
    assert_eq!(state.transitions.active(), Some(&key("/projects")));
}

#[test]
fn last_route_wins_while_entering() {
    let mut state = initialize(&Config::default());

    navigate(&mut state, "/developers");
    let actions = tick(&mut state, 400);
    assert_eq!(entering_routes(&actions), vec!["/developers".to_string()]);

    let actions = navigate(&mut state, "/projects");
    assert_eq!(entering_routes(&actions), vec!["/projects".to_string()]);
    assert!(!state.pages.contains_key(&key("/developers")));

    tick(&mut state, 800);
    assert_eq!(state.transitions.active(), Some(&key("/projects")));
}

#[test]
fn host_reported_completions_drive_transitions() {
    let mut state = initialize(&Config::default());

    let Some(Action::StartAnimation { ticket: exit, .. }) =
        navigate(&mut state, "/about").into_iter().next()
    else {
        panic!("expected exit animation");
    };
    let (render, actions) = complete(&mut state, exit);
    assert!(render);

    let (render, _) = complete(&mut state, exit);
    assert!(!render, "second completion of the same ticket is stale");

    let Some(Action::StartAnimation { ticket: enter, .. }) = actions.into_iter().next() else {
        panic!("expected enter animation");
    };
    complete(&mut state, enter);
    assert_eq!(state.transitions.active(), Some(&key("/about")));

    assert!(tick(&mut state, 5_000).is_empty(), "scheduled copies were discarded");
}

#[test]
fn third_route_wins_over_exiting_and_entering_routes() {
    let mut state = initialize(&Config::default());
    let mut seen_active = vec![];
    let mut record = |state: &AppState| {
        if let Some(active) = state.transitions.active() {
            seen_active.push(active.to_string());
        }
    };

    navigate(&mut state, "/developers");
    navigate(&mut state, "/projects");
    assert_eq!(state.transitions.phase_of(&key("/")), Some(TransitionPhase::Exiting));
    record(&state);

    tick(&mut state, 400);
    assert_eq!(state.transitions.phase_of(&key("/projects")), Some(TransitionPhase::Entering));
    record(&state);

    let actions = navigate(&mut state, "/community");
    assert_eq!(entering_routes(&actions), vec!["/community".to_string()]);
    assert_eq!(state.transitions.phase_of(&key("/projects")), None);
    record(&state);

    for now in [600, 800, 1_200] {
        tick(&mut state, now);
        record(&state);
    }

    assert!(state.transitions.is_idle());
    assert_eq!(state.transitions.active(), Some(&key("/community")));
    assert_eq!(state.pages.keys().collect::<Vec<_>>(), vec![&key("/community")]);
    assert!(seen_active.iter().all(|route| route == "/community"), "{seen_active:?}");
}

#[test]
fn coordinator_sequence_for_three_routes() {
    let mut coordinator = TransitionCoordinator::new(key("/"));

    let exit = match coordinator.on_route_change(key("/developers")).as_slice() {
        [TransitionEffect::Schedule { ticket, phase: TransitionPhase::Exiting, .. }] => *ticket,
        other => panic!("unexpected effects: {other:?}"),
    };
    assert!(coordinator.on_route_change(key("/projects")).is_empty());

    let Completion::Applied(effects) = coordinator.on_phase_complete(exit) else {
        panic!("exit completion was stale");
    };
    assert_eq!(
        &effects[..2],
        &[
            TransitionEffect::Unmount(key("/")),
            TransitionEffect::Mount(key("/projects")),
        ]
    );
    assert_eq!(coordinator.phase_of(&key("/developers")), None);
}
