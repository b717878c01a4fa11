use leptos::*;
use prism_ui::prelude::*;

use crate::SectionHeading;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
    accepted_terms: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SignupErrors {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    terms: Option<String>,
}

impl SignupErrors {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.terms.is_none()
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

fn validate_signup(form: &SignupForm) -> SignupErrors {
    let name = form
        .name
        .trim()
        .is_empty()
        .then(|| "Name is required".to_string());
    let email = if form.email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !looks_like_email(form.email.trim()) {
        Some("Enter a valid email address".to_string())
    } else {
        None
    };
    let password = if form.password.chars().count() < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters"))
    } else if !form.password.chars().any(|c| c.is_ascii_uppercase())
        || !form.password.chars().any(|c| c.is_ascii_digit())
    {
        Some("Include an uppercase letter and a number".to_string())
    } else {
        None
    };
    let terms = (!form.accepted_terms).then(|| "Accept the terms to continue".to_string());
    SignupErrors {
        name,
        email,
        password,
        terms,
    }
}

#[component]
pub(crate) fn FormsSection() -> impl IntoView {
    view! {
        <section id="forms" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="forms"
                title="Forms"
                summary="Form building blocks, responsive rows and a validated sign-up flow."
            />
            <div class="grid gap-6 lg:grid-cols-2">
                <FieldsDemo />
                <SignupDemo />
            </div>
            <ValidationStatesDemo />
        </section>
    }
}

#[component]
fn FieldsDemo() -> impl IntoView {
    view! {
        <Card title="Form Components">
            <div class="space-y-6">
                <FormGroup>
                    <FormLabel for_id="docs-email" marker=LabelMarker::Required>"Email Address"</FormLabel>
                    <Input id="docs-email" placeholder="you@example.com" left_icon=IconName::User />
                    <FormHelperText>"We'll never share your email."</FormHelperText>
                </FormGroup>
                <FormGroup>
                    <FormLabel for_id="docs-password" marker=LabelMarker::Required>"Password"</FormLabel>
                    <PasswordInput id="docs-password" error=true />
                    <FormError message=Some("Password must be at least 8 characters".to_string()) />
                </FormGroup>
                <FormGroup>
                    <FormLabel marker=LabelMarker::Optional>"Company"</FormLabel>
                    <Input placeholder="Acme Inc." />
                </FormGroup>
                <FormDivider label="Address" />
                <FormRow columns=FormColumns::Three>
                    <Input placeholder="City" />
                    <Input placeholder="Region" />
                    <Input placeholder="Postal code" />
                </FormRow>
                <FormDivider />
                <FormRow>
                    <Input placeholder="First name" />
                    <Input placeholder="Last name" />
                </FormRow>
            </div>
        </Card>
    }
}

#[component]
fn SignupDemo() -> impl IntoView {
    let form = create_rw_signal(SignupForm::default());
    let errors = create_rw_signal(SignupErrors::default());
    let submitted = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_signup(&form.get_untracked());
        submitted.set(result.is_empty());
        errors.set(result);
    };
    let field_error = move |pick: fn(&SignupErrors) -> Option<String>| {
        Signal::derive(move || errors.with(pick))
    };

    view! {
        <FormCard title="Create Account" description="Enter your details to get started">
            <form class="space-y-4" novalidate=true on:submit=submit>
                <FormGroup>
                    <FormLabel for_id="signup-name" marker=LabelMarker::Required>"Full Name"</FormLabel>
                    <Input
                        id="signup-name"
                        placeholder="Jordan Doe"
                        left_icon=IconName::Users
                        error=Signal::derive(move || errors.with(|e| e.name.is_some()))
                        on_input=Callback::new(move |value| form.update(|f| f.name = value))
                    />
                    <FormError message=field_error(|e| e.name.clone()) />
                </FormGroup>
                <FormGroup>
                    <FormLabel for_id="signup-email" marker=LabelMarker::Required>"Email"</FormLabel>
                    <Input
                        id="signup-email"
                        input_type="email"
                        placeholder="jordan@example.com"
                        autocomplete="email"
                        error=Signal::derive(move || errors.with(|e| e.email.is_some()))
                        on_input=Callback::new(move |value| form.update(|f| f.email = value))
                    />
                    <FormError message=field_error(|e| e.email.clone()) />
                </FormGroup>
                <FormGroup>
                    <FormLabel for_id="signup-password" marker=LabelMarker::Required>"Password"</FormLabel>
                    <PasswordInput
                        id="signup-password"
                        placeholder="Create a strong password"
                        error=Signal::derive(move || errors.with(|e| e.password.is_some()))
                        on_input=Callback::new(move |value| form.update(|f| f.password = value))
                    />
                    <FormHelperText>"Min 8 characters with an uppercase letter and a number"</FormHelperText>
                    <FormError message=field_error(|e| e.password.clone()) />
                </FormGroup>
                <FormGroup>
                    <Checkbox
                        id="signup-terms"
                        checked=Signal::derive(move || form.with(|f| f.accepted_terms))
                        label="I agree to the Terms of Service"
                        on_change=Callback::new(move |checked| form.update(|f| f.accepted_terms = checked))
                    />
                    <FormError message=field_error(|e| e.terms.clone()) />
                </FormGroup>
                <Button button_type="submit" variant=ButtonVariant::Gradient layout_class="w-full">
                    "Create Account"
                </Button>
                <Show when=move || submitted.get() fallback=|| ()>
                    <InlineAlert variant=InlineAlertVariant::Success>
                        {move || format!("Welcome aboard, {}!", form.with(|f| f.name.trim().to_string()))}
                    </InlineAlert>
                </Show>
            </form>
        </FormCard>
    }
}

#[component]
fn ValidationStatesDemo() -> impl IntoView {
    view! {
        <Card title="Validation States">
            <FormRow columns=FormColumns::Three>
                <FormGroup>
                    <FormLabel>"Default State"</FormLabel>
                    <Input placeholder="Enter value" />
                </FormGroup>
                <FormGroup>
                    <FormLabel>"Success State"</FormLabel>
                    <Input placeholder="Valid input" layout_class="border-green-500 focus-visible:ring-green-500" />
                    <p class="mt-1 text-xs text-green-600">"Looks good!"</p>
                </FormGroup>
                <FormGroup>
                    <FormLabel>"Error State"</FormLabel>
                    <Input placeholder="Invalid input" error=true />
                    <FormError message=Some("This field is required".to_string()) />
                </FormGroup>
            </FormRow>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Jordan Doe".to_string(),
            email: "jordan@example.com".to_string(),
            password: "Secret123".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(validate_signup(&valid_form()).is_empty());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_signup(&SignupForm::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.terms.as_deref(), Some("Accept the terms to continue"));
    }

    #[test]
    fn weak_passwords_need_an_uppercase_letter_and_digit() {
        let form = SignupForm {
            password: "lowercase-only".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate_signup(&form).password.as_deref(),
            Some("Include an uppercase letter and a number")
        );
    }

    #[test]
    fn email_shape_is_checked() {
        for email in ["jordan", "@example.com", "jordan@example", "jordan@@example.com", "a@b..c"] {
            assert!(!looks_like_email(email), "{email}");
        }
        assert!(looks_like_email("a@b.co"));
    }
}
