//! Registration Form Component

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::FormField;
use crate::models::RegisterData;
use crate::validation::{validate_register, FieldErrors};

/// Today's date in the browser's local time zone
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or(NaiveDate::MAX)
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let device_serial_number = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let purchase_date = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let (errors, set_errors) = signal(FieldErrors::default());
    let (register_error, set_register_error) = signal(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let data = RegisterData {
            full_name: full_name.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            address: address.get_untracked().trim().to_string(),
            purchase_date: purchase_date.get_untracked(),
            device_serial_number: device_serial_number.get_untracked().trim().to_string(),
        };
        if let Err(field_errors) = validate_register(&data, today()) {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_register_error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&data).await {
                Ok(()) => {
                    log::info!("[AUTH] Registered {}", data.email);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::error!("[AUTH] Registration failed: {}", e);
                    set_register_error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    view! {
        <div class="card register-card">
            <h2 class="card-title">"Registration"</h2>
            <p class="card-description">"Enter your details"</p>
            <form id="register-form" class="form-grid" on:submit=on_submit>
                <FormField
                    id="fullName"
                    label="Full name"
                    value=full_name
                    error=field_error("fullName")
                    placeholder="Ivan Ivanov"
                    autocomplete="name"
                />
                <FormField
                    id="email"
                    label="Email"
                    value=email
                    error=field_error("email")
                    placeholder="email@example.com"
                    autocomplete="email"
                />
                <FormField
                    id="phone"
                    label="Phone"
                    value=phone
                    error=field_error("phone")
                    input_type="tel"
                    placeholder="0888123456"
                    autocomplete="tel"
                />
                <FormField
                    id="deviceSerialNumber"
                    label="Serial number"
                    value=device_serial_number
                    error=field_error("deviceSerialNumber")
                    placeholder="SN-XXXXXXXX"
                />
                <FormField
                    id="address"
                    label="Delivery address"
                    value=address
                    error=field_error("address")
                    placeholder="Varna, Levski Blvd 12"
                    autocomplete="street-address"
                />
                <FormField
                    id="purchaseDate"
                    label="Purchase date"
                    value=purchase_date
                    error=field_error("purchaseDate")
                    input_type="date"
                />
                <FormField
                    id="password"
                    label="Password"
                    value=password
                    error=field_error("password")
                    input_type="password"
                    placeholder="******"
                    autocomplete="new-password"
                />

                {move || register_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })}

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="form-footer">
                "Already registered? " <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
