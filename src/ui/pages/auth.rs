//! Sign-in and password reset pages.

use dioxus::prelude::*;

use crate::ui::components::Layout;

const LOGIN_SCRIPT: &str = r#"
document.getElementById('login-form').addEventListener('submit', async (event) => {
    event.preventDefault();
    const form = event.target;
    const button = form.querySelector('button');
    button.setAttribute('aria-busy', 'true');
    try {
        const res = await fetch('/api/auth/login', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ email: form.email.value, password: form.password.value })
        });
        if (res.ok) {
            window.location.href = '/screens';
            return;
        }
        toast(await apiMessage(res), 'error');
    } catch (e) {
        toast(e.message, 'error');
    }
    button.removeAttribute('aria-busy');
});
"#;

const FORGOT_PASSWORD_SCRIPT: &str = r#"
document.getElementById('forgot-form').addEventListener('submit', async (event) => {
    event.preventDefault();
    const form = event.target;
    const button = form.querySelector('button');
    button.setAttribute('aria-busy', 'true');
    try {
        const res = await fetch('/api/auth/forgot-password', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ email: form.email.value })
        });
        toast(await apiMessage(res), res.ok ? 'success' : 'error');
        if (res.ok) form.reset();
    } catch (e) {
        toast(e.message, 'error');
    }
    button.removeAttribute('aria-busy');
});
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LoginPageProps {
    /// Arrived here because a protected page found no valid session
    pub session_expired: bool,
}

#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    rsx! {
        Layout {
            title: "Login".to_string(),
            nav_active: "login".to_string(),
            hide_nav: true,
            scripts: Some(LOGIN_SCRIPT.to_string()),

            article { style: "max-width:420px;margin:4rem auto;",
                hgroup {
                    h2 { "Login" }
                    p { "Sign in to manage screens and campaigns" }
                }
                if props.session_expired {
                    p { class: "status-err", "Your session has expired, please sign in again." }
                }
                form { id: "login-form",
                    label { "Email"
                        input { r#type: "email", name: "email", required: true, autocomplete: "username" }
                    }
                    label { "Password"
                        input { r#type: "password", name: "password", required: true, autocomplete: "current-password" }
                    }
                    button { r#type: "submit", "Continue" }
                }
                small { a { href: "/auth/forgot-password", "Forgot password?" } }
            }
        }
    }
}

#[component]
pub fn ForgotPasswordPage() -> Element {
    rsx! {
        Layout {
            title: "Forgot Password".to_string(),
            nav_active: "login".to_string(),
            hide_nav: true,
            scripts: Some(FORGOT_PASSWORD_SCRIPT.to_string()),

            article { style: "max-width:420px;margin:4rem auto;",
                hgroup {
                    h2 { "Forgot password" }
                    p { "We will email you a link to reset it" }
                }
                form { id: "forgot-form",
                    label { "Email"
                        input { r#type: "email", name: "email", required: true }
                    }
                    button { r#type: "submit", "Send reset link" }
                }
                small { a { href: "/auth/login", "Back to login" } }
            }
        }
    }
}
