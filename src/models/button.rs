/// Los cuatro botones de la pantalla de prueba
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Success,
        ButtonVariant::Danger,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_distinct_and_ordered() {
        let labels: Vec<_> = ButtonVariant::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["primary", "secondary", "success", "danger"]);
        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), 4);
    }
}
