use super::{
    components::{
        card::{EmployeeInfo, ShiftActions},
        lookup::LookupForm,
        recent::RecentAccesses,
    },
    repository::EmployeeCard,
    view_model::{use_register_shift_view_model, RegisterShiftViewModel},
};
use crate::components::layout::{ErrorMessage, FeedbackMessage, LoadingSpinner, PageHeader};
use leptos::*;

#[component]
fn CardView(vm: RegisterShiftViewModel, card: EmployeeCard) -> impl IntoView {
    let employee_id = card.employee.id;
    view! {
        <div>
            <FeedbackMessage feedback=vm.feedback />
            <div class="grid gap-4 md:grid-cols-2">
                <EmployeeInfo employee=card.employee />
                <ShiftActions vm=vm employee_id=employee_id />
            </div>
            <RecentAccesses vm=vm employee_id=employee_id records=card.recent />
        </div>
    }
}

/// Clock-in screen. `kiosk` hides admin-only affordances such as looking up another employee.
#[component]
pub fn RegisterShiftPanel(
    employee_id: Option<i64>,
    #[prop(optional)] kiosk: bool,
    on_exit: Callback<()>,
) -> impl IntoView {
    let vm = use_register_shift_view_model(employee_id);
    let on_back = (!kiosk).then_some(on_exit);

    view! {
        <div class="max-w-5xl mx-auto">
            {match on_back {
                Some(on_back) => view! { <PageHeader title="Registrar Turno" on_back=on_back /> }.into_view(),
                None => view! { <PageHeader title="Registrar Turno" /> }.into_view(),
            }}
            {move || match vm.target.get() {
                None => view! { <LookupForm vm=vm on_back=on_exit /> }.into_view(),
                Some(_) => view! {
                    <Transition fallback=|| view! { <LoadingSpinner label="Cargando…" /> }>
                        {move || vm.card.get().flatten().map(|result| match result {
                            Ok(card) => view! { <CardView vm=vm card=card /> }.into_view(),
                            Err(message) => view! {
                                <div>
                                    <ErrorMessage message=message />
                                    {(!kiosk).then(|| view! {
                                        <button
                                            type="button"
                                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                                            on:click=move |_| vm.reset_lookup()
                                        >
                                            "Buscar otro empleado"
                                        </button>
                                    })}
                                </div>
                            }
                            .into_view(),
                        })}
                    </Transition>
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::ShiftKind,
        test_support::{
            helpers::{employee, shift_record},
            ssr::render_to_string,
        },
    };

    #[test]
    fn without_id_the_lookup_step_is_shown() {
        let html = render_to_string(move || {
            view! { <RegisterShiftPanel employee_id=None on_exit=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("ID del empleado"));
        assert!(html.contains("Continuar"));
    }

    #[test]
    fn card_shows_employee_toggle_and_recent_records() {
        let html = render_to_string(move || {
            let vm = use_register_shift_view_model(Some(4));
            let card = EmployeeCard {
                employee: employee(4, true),
                recent: vec![shift_record(1, 4, ShiftKind::Entrada, "2024-05-01T08:00:00")],
            };
            view! { <CardView vm=vm card=card /> }
        });
        assert!(html.contains("Mi Información"));
        assert!(html.contains("Laura Gómez"));
        assert!(html.contains("Registrar entrada"));
        assert!(html.contains("Salida"));
        assert!(html.contains("01&#x2F;05&#x2F;2024 08:00:00"));
        assert!(html.contains("Descargar historial (PDF)"));
    }
}
