use dioxus::prelude::*;
use ui::views::DeliveryNotesView;

#[component]
pub fn DeliveryNotes() -> Element {
    rsx! {
        DeliveryNotesView {}
    }
}
