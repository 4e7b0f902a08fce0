#[cfg(test)]
mod tests {
    use super::super::owner::Calculator;
    use super::super::reading::TemperatureReading;
    use super::super::view::CalculatorView;
    use crate::config::Config;
    use crate::convert::Scale;
    use crate::format::{NumberFormat, ParsePolicy};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let calculator = Calculator::new();
        assert_eq!(calculator.reading(), TemperatureReading::new("", Scale::Celsius));

        let view = calculator.view();
        assert_eq!(view.celsius_text, "");
        assert_eq!(view.fahrenheit_text, "");
        assert_eq!(view.boiling, None);
    }

    #[test]
    fn test_edit_celsius_then_fahrenheit() {
        let calculator = Calculator::new();

        calculator.on_edit("37", Scale::Celsius);
        let view = calculator.view();
        assert_eq!(view.celsius_text, "37");
        assert_eq!(view.fahrenheit_text, "98.6");
        assert_eq!(view.boiling, Some(false));

        calculator.on_edit("212", Scale::Fahrenheit);
        let view = calculator.view();
        assert_eq!(view.fahrenheit_text, "212");
        assert_eq!(view.celsius_text, "100");
        assert_eq!(view.boiling, Some(true));
        assert_eq!(calculator.reading(), TemperatureReading::new("212", Scale::Fahrenheit));
    }

    #[test]
    fn test_invalid_text_is_stored_verbatim() {
        let calculator = Calculator::new();
        calculator.on_edit("abc", Scale::Fahrenheit);

        assert_eq!(calculator.reading().amount, "abc");
        let view = calculator.view();
        assert_eq!(view.fahrenheit_text, "abc");
        assert_eq!(view.celsius_text, "");
        assert_eq!(view.celsius_amount, None);
        assert_eq!(view.boiling, None);
    }

    #[test]
    fn test_edited_field_keeps_raw_text() {
        let calculator = Calculator::new();
        calculator.on_edit("100.50000", Scale::Celsius);

        let view = calculator.view();
        assert_eq!(view.celsius_text, "100.50000");
        assert_eq!(view.fahrenheit_text, "212.9");
        assert_eq!(view.boiling, Some(true));
    }

    #[test]
    fn test_lenient_prefix_in_edited_field_drives_verdict() {
        let calculator = Calculator::new();
        calculator.on_edit("120 degrees", Scale::Celsius);
        assert_eq!(calculator.view().boiling, Some(true));
        assert_eq!(calculator.view().fahrenheit_text, "248");
    }

    #[test]
    fn test_view_is_idempotent() {
        let calculator = Calculator::new();
        calculator.on_edit("-12.345678", Scale::Fahrenheit);
        assert_eq!(calculator.view(), calculator.view());
        assert_eq!(
            calculator.view(),
            CalculatorView::derive(&calculator.reading(), &NumberFormat::default())
        );
    }

    #[test]
    fn test_scale_tracks_last_edit() {
        let calculator = Calculator::new();
        for (amount, scale) in [
            ("1", Scale::Fahrenheit),
            ("2", Scale::Celsius),
            ("3", Scale::Celsius),
            ("4", Scale::Fahrenheit),
        ] {
            calculator.on_edit(amount, scale);
            assert_eq!(calculator.reading().scale, scale);
            assert_eq!(calculator.view().scale, scale);
            assert_eq!(calculator.view().text_for(scale), amount);
        }
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let calculator = Calculator::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first_log = Rc::clone(&log);
        let _first = calculator.subscribe(move |view| {
            first_log.borrow_mut().push(format!("first:{}", view.fahrenheit_text))
        });
        let second_log = Rc::clone(&log);
        let _second = calculator.subscribe(move |view| {
            second_log.borrow_mut().push(format!("second:{}", view.fahrenheit_text))
        });

        calculator.on_edit("0", Scale::Celsius);

        assert_eq!(*log.borrow(), vec!["first:32", "second:32"]);
    }

    #[test]
    fn test_dropped_subscription_stops_firing() {
        let calculator = Calculator::new();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let subscription = calculator.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(calculator.subscriber_count(), 1);

        calculator.on_edit("1", Scale::Celsius);
        drop(subscription);
        calculator.on_edit("2", Scale::Celsius);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(calculator.subscriber_count(), 0);
    }

    #[test]
    fn test_unchanged_edit_still_notifies() {
        let calculator = Calculator::new();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let _subscription = calculator.subscribe(move |_| *counter.borrow_mut() += 1);

        calculator.on_edit("5", Scale::Celsius);
        calculator.on_edit("5", Scale::Celsius);

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_subscriber_can_read_state() {
        let calculator = Calculator::new();
        let handle = calculator.clone();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        let _subscription = calculator.subscribe(move |view| {
            // The state borrow is released before callbacks run
            assert_eq!(handle.view(), *view);
            *sink.borrow_mut() = Some(handle.reading());
        });

        calculator.on_edit("50", Scale::Fahrenheit);
        assert_eq!(
            *seen.borrow(),
            Some(TemperatureReading::new("50", Scale::Fahrenheit))
        );
    }

    #[test]
    fn test_edit_handlers_are_tagged_with_their_scale() {
        let calculator = Calculator::new();
        let celsius = calculator.edit_handler(Scale::Celsius);
        let fahrenheit = calculator.edit_handler(Scale::Fahrenheit);

        fahrenheit("32");
        assert_eq!(calculator.reading(), TemperatureReading::new("32", Scale::Fahrenheit));
        assert_eq!(calculator.view().celsius_text, "0");

        celsius("-40");
        assert_eq!(calculator.reading(), TemperatureReading::new("-40", Scale::Celsius));
        assert_eq!(calculator.view().fahrenheit_text, "-40");
    }

    #[test]
    fn test_reset_uses_initial_scale() {
        let config = Config::load_from_str("[calculator]\ninitial_scale = \"fahrenheit\"\n").unwrap();
        let calculator = Calculator::with_config(&config);
        assert_eq!(calculator.reading().scale, Scale::Fahrenheit);

        calculator.on_edit("20", Scale::Celsius);
        calculator.reset();
        assert_eq!(calculator.reading(), TemperatureReading::empty(Scale::Fahrenheit));
    }

    #[test]
    fn test_strict_config_blanks_prefix_input() {
        let format = NumberFormat {
            precision: 3,
            policy: ParsePolicy::Strict,
        };
        let calculator = Calculator::with_format(format, Scale::Celsius);
        calculator.on_edit("12xyz", Scale::Celsius);

        let view = calculator.view();
        assert_eq!(view.celsius_text, "12xyz");
        assert_eq!(view.fahrenheit_text, "");
        assert_eq!(view.boiling, None);
    }

    #[test]
    fn test_render_verdict_follows_celsius_amount() {
        let calculator = Calculator::new();
        assert!(calculator.render().verdict.is_none());

        calculator.on_edit("99.9999", Scale::Celsius);
        let verdict = calculator.render().verdict.unwrap();
        assert!(!verdict.boils());

        calculator.on_edit("211.9995", Scale::Fahrenheit);
        // 99.99972 C rounds to 100 in the Celsius field
        let verdict = calculator.render().verdict.unwrap();
        assert_eq!(verdict.celsius, 100.0);
        assert!(verdict.boils());
    }

    #[test]
    fn test_near_max_fahrenheit_still_boils() {
        let calculator = Calculator::new();
        calculator.on_edit("1.7e308", Scale::Fahrenheit);

        let view = calculator.view();
        assert!(!view.celsius_text.contains("inf"));
        assert!(view.celsius_amount.map_or(false, |c| c.is_finite() && c > 9.0e307));
        assert_eq!(view.boiling, Some(true));
    }

    #[test]
    fn test_overflowing_conversion_blanks_other_field() {
        let calculator = Calculator::new();
        calculator.on_edit("1e308", Scale::Celsius);

        let view = calculator.view();
        assert_eq!(view.fahrenheit_text, "");
        assert_eq!(view.celsius_text, "1e308");
        assert_eq!(view.boiling, Some(true));
    }

    #[test]
    fn test_subscriber_can_change_subscriptions_while_notified() {
        let calculator = Calculator::new();
        let held = Rc::new(RefCell::new(Vec::new()));
        let fired = Rc::new(RefCell::new(0));

        let handle = calculator.clone();
        let held_in_callback = Rc::clone(&held);
        let fired_in_callback = Rc::clone(&fired);
        let first = calculator.subscribe(move |_| {
            // Clear everything, then register a fresh subscriber
            held_in_callback.borrow_mut().clear();
            let counter = Rc::clone(&fired_in_callback);
            let added = handle.subscribe(move |_| *counter.borrow_mut() += 1);
            held_in_callback.borrow_mut().push(added);
        });
        held.borrow_mut().push(first);

        calculator.on_edit("10", Scale::Celsius);
        assert_eq!(calculator.subscriber_count(), 1);
        assert_eq!(*fired.borrow(), 0);

        calculator.on_edit("20", Scale::Celsius);
        assert_eq!(*fired.borrow(), 1);
    }
}
