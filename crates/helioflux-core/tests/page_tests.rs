// Host-side tests for the page session: components wired to one timeline
// and driven by a virtual clock.

use glam::Vec2;
use helioflux_core::orientation::Orientation;
use helioflux_core::page::FORM_SENT_MESSAGE;
use helioflux_core::scroll::Section;
use helioflux_core::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn chart_bar_fills_after_delay() {
    let mut page = Page::default();
    let bar = page.observe(Category::ChartBar);
    page.add_bar(bar, "75");

    assert!(page.report_intersection(bar, true).unwrap());
    assert_eq!(page.take_effects(), vec![Effect::Revealed(bar)]);

    page.advance_to(ms(199));
    assert!(page.take_effects().is_empty());
    page.advance_to(ms(200));
    assert_eq!(
        page.take_effects(),
        vec![Effect::BarWidth {
            element: bar,
            percent: 75.0
        }]
    );
}

#[test]
fn stat_counts_up_over_two_seconds() {
    let mut page = Page::default();
    let stat = page.observe(Category::Stat);
    assert_eq!(page.add_counter(stat, "85%").unwrap(), "0%");

    page.report_intersection(stat, true).unwrap();
    page.take_effects();
    page.advance_to(ms(2000));

    let texts: Vec<String> = page
        .take_effects()
        .into_iter()
        .filter_map(|e| match e {
            Effect::CounterText { text, .. } => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 60);
    assert_eq!(texts.last().map(String::as_str), Some("85%"));
    assert!(page.reveal().counter(stat).unwrap().is_animated());
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn animate_counter_twice_does_not_restart() {
    let mut page = Page::default();
    let stat = page.observe(Category::Stat);
    page.add_counter(stat, "120+").unwrap();

    assert!(page.animate_counter(stat).unwrap());
    assert!(!page.animate_counter(stat).unwrap());
    page.advance_to(ms(5000));
    let steps = page.take_effects().len();
    assert_eq!(steps, 60);

    // Entering the viewport afterwards only reveals; the text stays put
    assert!(!page.animate_counter(stat).unwrap());
    page.report_intersection(stat, true).unwrap();
    page.advance_to(ms(10_000));
    assert_eq!(page.take_effects(), vec![Effect::Revealed(stat)]);
    assert_eq!(page.reveal().counter(stat).unwrap().display(), "120+");
}

#[test]
fn animate_counter_on_unknown_element_errors() {
    let mut page = Page::default();
    let plain = page.observe(Category::Reveal);
    assert_eq!(
        page.animate_counter(plain).unwrap_err(),
        CoreError::UnknownElement(plain)
    );
}

#[test]
fn fallback_reveals_everything_at_once() {
    let mut page = Page::default();
    let a = page.observe(Category::Reveal);
    let b = page.observe(Category::Lazy(LazyKind::Content));
    let c = page.observe(Category::Lazy(LazyKind::Image));
    page.report_intersection(a, true).unwrap();
    page.take_effects();

    page.reveal_all();
    assert_eq!(
        page.take_effects(),
        vec![
            Effect::Revealed(b),
            Effect::LoadContent(b),
            Effect::Revealed(c),
            Effect::LoadImage(c),
        ]
    );
}

#[test]
fn scroll_is_debounced() {
    let mut page = Page::default();
    page.set_sections(vec![
        Section {
            id: "hero".into(),
            top: 0.0,
        },
        Section {
            id: "race".into(),
            top: 1000.0,
        },
    ]);

    page.on_scroll(10.0);
    page.advance_to(ms(5));
    page.on_scroll(900.0);
    page.advance_to(ms(14));
    assert!(page.take_effects().is_empty());

    page.advance_to(ms(15));
    let effects = page.take_effects();
    assert!(effects.contains(&Effect::ActiveSection(Some("race".into()))));
    assert!(effects.contains(&Effect::NavbarScrolled(true)));
    assert!(effects.contains(&Effect::BodyScrolledDown(true)));
    assert!(!effects.contains(&Effect::ActiveSection(Some("hero".into()))));
    assert_eq!(page.scroll().active(), Some("race"));
}

#[test]
fn sections_measured_at_scroll_time_win() {
    let layout = |race_top| {
        vec![
            Section {
                id: "hero".into(),
                top: 0.0,
            },
            Section {
                id: "race".into(),
                top: race_top,
            },
        ]
    };
    let mut page = Page::default();
    page.set_sections(layout(1000.0));
    page.on_scroll(0.0);
    page.advance_to(ms(10));
    page.take_effects();

    // Content above the race section grew by 500px.
    page.set_sections(layout(1500.0));
    page.on_scroll(900.0);
    page.advance_to(ms(20));
    let effects = page.take_effects();
    assert!(!effects.contains(&Effect::ActiveSection(Some("race".into()))));
    assert_eq!(page.scroll().active(), Some("hero"));

    page.set_sections(layout(1500.0));
    page.on_scroll(1300.0);
    page.advance_to(ms(30));
    assert!(page
        .take_effects()
        .contains(&Effect::ActiveSection(Some("race".into()))));
}

#[test]
fn race_runs_to_results() {
    let mut page = Page::default();
    assert!(page.start_race());
    assert!(!page.start_race());

    let started = page.take_effects();
    assert_eq!(started[0], Effect::RaceStarted);

    // 60 ticks of 50ms, then a 1s settle
    page.advance_to(ms(3999));
    let effects = page.take_effects();
    let frames = effects
        .iter()
        .filter(|e| matches!(e, Effect::RaceFrame(_)))
        .count();
    assert_eq!(frames, 60);
    assert!(!effects.contains(&Effect::RaceResults));
    assert!(!page.start_race());

    page.advance_to(ms(4000));
    assert_eq!(page.take_effects(), vec![Effect::RaceResults]);
    assert!(page.start_race());
}

#[test]
fn notification_lifecycle_is_exact() {
    let mut page = Page::default();
    page.advance_to(ms(1000));
    let id = page.notify("Saved", NotificationKind::Success);
    page.advance_to(ms(500)); // earlier than now: no-op
    assert_eq!(page.notifications().get(id).unwrap().created_at, ms(1000));

    page.advance_to(ms(1099));
    assert_eq!(page.take_effects().len(), 1); // created
    page.advance_to(ms(1100));
    assert_eq!(page.take_effects(), vec![Effect::NotificationEnter(id)]);
    page.advance_to(ms(6000));
    assert_eq!(page.take_effects(), vec![Effect::NotificationExit(id)]);
    page.advance_to(ms(6299));
    assert!(page.take_effects().is_empty());
    assert_eq!(page.notifications().len(), 1);
    page.advance_to(ms(6300));
    assert_eq!(page.take_effects(), vec![Effect::NotificationRemoved(id)]);
    assert!(page.notifications().is_empty());
}

#[test]
fn notifications_run_independently() {
    let mut page = Page::default();
    let first = page.notify("one", NotificationKind::Info);
    page.advance_to(ms(2000));
    let second = page.notify("two", NotificationKind::Error);
    assert_eq!(page.notifications().len(), 2);

    page.advance_to(ms(5300));
    assert!(page.notifications().get(first).is_none());
    assert!(page.notifications().get(second).is_some());
    page.advance_to(ms(7300));
    assert!(page.notifications().is_empty());
}

#[test]
fn viewer_inputs_project_to_effects() {
    let mut page = Page::default();
    page.begin_drag(Vec2::new(0.0, 0.0));
    page.drag_to(Vec2::new(10.0, 10.0));
    page.end_drag();
    assert_eq!(
        page.take_effects(),
        vec![
            Effect::Grabbing(true),
            Effect::ModelTransform(Orientation {
                pitch: -20.0,
                yaw: 20.0
            }),
            Effect::Grabbing(false),
        ]
    );

    page.toggle_auto_rotate();
    page.begin_drag(Vec2::ZERO);
    page.drag_to(Vec2::new(40.0, 0.0));
    page.toggle_auto_rotate();
    let effects = page.take_effects();
    assert_eq!(effects[0], Effect::AutoRotate(true));
    assert_eq!(
        effects.last(),
        Some(&Effect::ModelTransform(Orientation {
            pitch: -20.0,
            yaw: 20.0
        }))
    );

    page.select_component("Spring Steel Platform");
    page.reset_viewer();
    let effects = page.take_effects();
    assert!(matches!(effects[0], Effect::Highlight(Some(_))));
    assert!(effects.contains(&Effect::Highlight(None)));
    assert_eq!(
        effects.last(),
        Some(&Effect::ModelTransform(Orientation::default()))
    );
}

#[test]
fn intro_is_staggered() {
    let mut page = Page::default();
    page.start_intro(3, true);
    page.advance_to(ms(2000));
    assert_eq!(
        page.take_effects(),
        vec![
            Effect::IntroLine(0),
            Effect::IntroLine(1),
            Effect::PageLoaded,
            Effect::IntroLine(2),
            Effect::IntroHighlight,
        ]
    );
}

#[test]
fn form_submission_reports_success() {
    let mut page = Page::default();
    page.submit_form(FormId(2));
    assert_eq!(page.take_effects(), vec![Effect::FormSubmitting(FormId(2))]);

    page.advance_to(ms(2000));
    let effects = page.take_effects();
    assert_eq!(effects[0], Effect::FormSent(FormId(2)));
    assert!(matches!(
        &effects[1],
        Effect::NotificationCreated { message, kind: NotificationKind::Success, .. }
            if message == FORM_SENT_MESSAGE
    ));
}

#[test]
fn shortened_config_is_honoured() {
    let config = PageConfig {
        counter_steps: 4,
        counter_duration: ms(40),
        ..PageConfig::default()
    };
    let mut page = Page::new(config);
    let stat = page.observe(Category::Stat);
    page.add_counter(stat, "8").unwrap();
    page.animate_counter(stat).unwrap();
    page.advance_to(ms(40));
    let texts: Vec<Effect> = page.take_effects();
    assert_eq!(
        texts,
        [2, 4, 6, 8]
            .iter()
            .map(|v| Effect::CounterText {
                element: stat,
                text: v.to_string()
            })
            .collect::<Vec<_>>()
    );
}

#[test]
fn quote_fades_in_two_steps() {
    let mut page = Page::default();
    page.show_quote();
    page.advance_to(ms(99));
    assert!(page.take_effects().is_empty());
    page.advance_to(ms(100));
    assert_eq!(page.take_effects(), vec![Effect::QuoteFadeStart]);
    page.advance_to(ms(150));
    assert_eq!(page.take_effects(), vec![Effect::QuoteFadeEnd]);
    assert_eq!(page.next_deadline(), None);
}
