use crate::context::LanguageContext;
use crate::models::ButtonVariant;
use crate::services::Notifier;

/// Click en un botón de prueba: una línea de log y un toast, sin estado
pub fn activate_button(variant: ButtonVariant, notifier: &dyn Notifier, texts: &LanguageContext) {
    log::info!("🖱️ Botón {} pulsado", variant.label());
    notifier.success(&texts.text_with("button_clicked", variant.label()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Language;
    use crate::testing::{capture_logs, captured_logs, event_log, Event, FakeNotifier};

    #[test]
    fn each_activation_logs_once_and_notifies_once() {
        let texts = LanguageContext::new(Language::French);

        for variant in ButtonVariant::ALL {
            capture_logs();
            let log = event_log();
            let notifier = FakeNotifier { log: log.clone() };

            activate_button(variant, &notifier, &texts);

            let logs = captured_logs();
            assert_eq!(logs.len(), 1, "{:?}", logs);
            assert!(logs[0].contains(variant.label()));
            assert_eq!(
                *log.borrow(),
                vec![Event::Notify(format!("Bouton {} cliqué !", variant.label()))]
            );
        }
    }

    #[test]
    fn repeated_activations_are_independent() {
        capture_logs();
        let texts = LanguageContext::new(Language::Spanish);
        let log = event_log();
        let notifier = FakeNotifier { log: log.clone() };

        activate_button(ButtonVariant::Danger, &notifier, &texts);
        activate_button(ButtonVariant::Danger, &notifier, &texts);
        activate_button(ButtonVariant::Primary, &notifier, &texts);

        let logs = captured_logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs.iter().filter(|l| l.contains("danger")).count(), 2);
        assert_eq!(logs.iter().filter(|l| l.contains("primary")).count(), 1);
        assert_eq!(
            *log.borrow(),
            vec![
                Event::Notify("¡Botón danger pulsado!".to_string()),
                Event::Notify("¡Botón danger pulsado!".to_string()),
                Event::Notify("¡Botón primary pulsado!".to_string()),
            ]
        );
    }
}
