use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::use_api;
use crate::system::auth::context::{do_login, use_auth};

fn login_title(tenant: Option<&str>) -> String {
    match tenant {
        Some(t) => format!("Вход в систему · {}", t),
        None => "Вход в систему".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let (title, remembered) = api.with_value(|a| {
        let session = a.session();
        (
            login_title(session.tenant()),
            session.last_username().unwrap_or_default(),
        )
    });

    let username = RwSignal::new(remembered);
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let (_, set_auth_state) = use_auth();

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let login = username.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if login.is_empty() || secret.is_empty() {
            set_error.set(Some("Введите логин и пароль".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        let client = api.get_value();
        spawn_local(async move {
            // RequireAuth сам переключится на приложение
            if let Err(e) = do_login(&client, set_auth_state, login, secret).await {
                log::warn!("login failed: {}", e);
                password.set(String::new());
                set_error.set(Some(format!("Не удалось войти: {}", e)));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-container">
            <form
                class="login-box"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1>"Админ-панель"</h1>
                <h2>{title}</h2>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"Логин"</Label>
                    <Input value=username disabled=Signal::derive(move || submitting.get()) />
                </div>

                <div class="form__group">
                    <Label>"Пароль"</Label>
                    <Input
                        value=password
                        input_type=InputType::Password
                        disabled=Signal::derive(move || submitting.get())
                    />
                </div>

                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() {
                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                    } else {
                        view! { <span>"Войти"</span> }.into_any()
                    }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_title() {
        assert_eq!(login_title(None), "Вход в систему");
        assert_eq!(login_title(Some("acme")), "Вход в систему · acme");
    }
}
