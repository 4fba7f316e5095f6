use leptos::prelude::*;
use thaw::*;

use crate::shared::modal_stack::ModalStackService;

/// Pushes a Cancel/Confirm modal. `on_confirm` runs after the modal closed;
/// cancelling (button, overlay or Escape) runs nothing.
pub fn confirm(
    modal_stack: ModalStackService,
    title: impl Into<String>,
    message: impl Into<String>,
    confirm_label: &'static str,
    on_confirm: Callback<()>,
) {
    let message = message.into();
    modal_stack.push_sized(title, Some("420px".to_string()), move |handle| {
        view! {
            <div class="confirm-dialog">
                <p class="confirm-dialog__message">{message.clone()}</p>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button on_click=move |_| handle.close()>"Cancel"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            handle.close();
                            on_confirm.run(());
                        }
                    >
                        {confirm_label}
                    </Button>
                </Flex>
            </div>
        }
        .into_any()
    });
}
