//! Contact Submission Pipeline - guarded two-stage delivery.
//!
//! 1. Refuse if a submission is already in flight
//! 2. Deliver the draft to the owner-notification template
//! 3. Only if that succeeds, deliver the same payload to the auto-reply template
//! 4. Report through a toast; clear the draft only on full success

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        error::DeliveryStage,
        ports::{DeliveryRequest, DeliveryTransport},
        services::toast_service::ToastService,
        state::SharedState,
    },
    domain::{ContactPayload, DeliverySettings, ToastKind, ToastMessages},
};

/// How a submit call ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was in flight; nothing happened.
    Ignored,
    /// Both stages were accepted.
    Delivered,
    /// A stage was rejected; the draft is intact.
    Failed(ApplicationError),
}

pub struct ContactSubmissionPipeline {
    transport: Arc<dyn DeliveryTransport>,
    delivery: DeliverySettings,
    messages: ToastMessages,
    state: SharedState,
    toasts: ToastService,
}

impl ContactSubmissionPipeline {
    pub fn new(
        transport: Arc<dyn DeliveryTransport>,
        delivery: DeliverySettings,
        messages: ToastMessages,
        state: SharedState,
        toasts: ToastService,
    ) -> Self {
        Self {
            transport,
            delivery,
            messages,
            state,
            toasts,
        }
    }

    /// Submit the current draft.
    ///
    /// `busy` is set before stage 1 goes out and cleared on every exit path.
    #[instrument(skip_all)]
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = self.state.with(|s| {
            if s.busy {
                None
            } else {
                s.busy = true;
                Some(s.draft.payload())
            }
        });
        let Some(payload) = payload else {
            debug!("Submission already in flight; ignoring");
            return SubmitOutcome::Ignored;
        };

        match self.dispatch(payload).await {
            Ok(()) => {
                self.state.with(|s| {
                    s.busy = false;
                    s.draft.clear();
                });
                info!("Contact message delivered");
                self.toasts.show(self.messages.success.clone(), ToastKind::Success);
                SubmitOutcome::Delivered
            }
            Err(e) => {
                self.state.with(|s| s.busy = false);
                warn!(error = %e, "Contact message failed");
                self.toasts.show(self.messages.error.clone(), ToastKind::Error);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Run both stages in order; stage 2 only after stage 1 resolves.
    async fn dispatch(&self, payload: ContactPayload) -> Result<(), ApplicationError> {
        self.deliver(DeliveryStage::Notify, payload.clone()).await?;
        self.deliver(DeliveryStage::AutoReply, payload).await
    }

    async fn deliver(
        &self,
        stage: DeliveryStage,
        payload: ContactPayload,
    ) -> Result<(), ApplicationError> {
        let template_id = match stage {
            DeliveryStage::Notify => &self.delivery.notify_template_id,
            DeliveryStage::AutoReply => &self.delivery.autoreply_template_id,
        };
        let request = DeliveryRequest {
            service_id: self.delivery.service_id.clone(),
            template_id: template_id.clone(),
            payload,
            public_key: self.delivery.public_key.clone(),
        };

        info!(stage = stage.number(), template = %template_id, "Dispatching delivery");
        self.transport
            .deliver(request)
            .await
            .map_err(|e| ApplicationError::Delivery {
                stage,
                reason: e.to_string(),
            })
    }
}
