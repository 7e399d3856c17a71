use std::rc::Rc;

use shared::shared_group_questionnaire::{GroupBookingDraft, WizardAction, WizardEvent, WizardState};
use yew::prelude::*;

/// Wizard state plus the most recent event, tagged so repeated events are told apart.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WizardModel {
    pub state: WizardState,
    pub pending: Option<(u32, WizardEvent)>,
    event_seq: u32,
}

impl Reducible for WizardModel {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: WizardAction) -> Rc<Self> {
        let (state, event) = self.state.reduce(action);
        let mut next = (*self).clone();
        next.state = state;
        if let Some(event) = event {
            next.event_seq += 1;
            next.pending = Some((next.event_seq, event));
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct GroupWizardHandle {
    pub state: WizardState,
    pub dispatch: Callback<WizardAction>,
}

#[hook]
pub fn use_group_wizard(
    on_submit: Callback<GroupBookingDraft>,
    on_exit: Callback<()>,
) -> GroupWizardHandle {
    let model = use_reducer(WizardModel::default);

    {
        let pending = model.pending.clone();
        use_effect_with(pending, move |pending| {
            match pending {
                Some((_, WizardEvent::Submitted(draft))) => on_submit.emit(draft.clone()),
                Some((_, WizardEvent::Exited)) => on_exit.emit(()),
                None => {}
            }
            || ()
        });
    }

    let dispatch = {
        let model = model.clone();
        Callback::from(move |action: WizardAction| model.dispatch(action))
    };

    GroupWizardHandle {
        state: model.state.clone(),
        dispatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_tags_each_event() {
        let model = Rc::new(WizardModel::default());
        let model = model.reduce(WizardAction::Retreat);
        assert_eq!(model.pending, Some((1, WizardEvent::Exited)));

        let model = model.reduce(WizardAction::SetGroupSize(4));
        assert_eq!(model.pending, Some((1, WizardEvent::Exited)));

        let model = model.reduce(WizardAction::Retreat);
        assert_eq!(model.pending, Some((2, WizardEvent::Exited)));
        assert_eq!(model.state.draft.group_size, 4);
    }

    #[test]
    fn test_submission_is_tagged_once() {
        use shared::shared_group_questionnaire::{CelebrationTag, ProcedureTag};

        let actions = [
            WizardAction::SetGroupSize(6),
            WizardAction::Advance,
            WizardAction::ToggleCelebration(CelebrationTag::Birthday),
            WizardAction::Advance,
            WizardAction::Advance,
            WizardAction::ToggleProcedure(ProcedureTag::Dental),
            WizardAction::Advance,
            WizardAction::SetCoordinatorName("Ana".to_string()),
            WizardAction::SetCoordinatorEmail("ana@example.com".to_string()),
            WizardAction::SetCoordinatorPhone("+1 555 0100".to_string()),
            WizardAction::Advance,
        ];
        let model = actions
            .into_iter()
            .fold(Rc::new(WizardModel::default()), |model, action| model.reduce(action));

        let draft = match &model.pending {
            Some((1, WizardEvent::Submitted(draft))) => draft.clone(),
            other => panic!("expected first submission, got {:?}", other),
        };
        assert_eq!(draft.group_size, 6);

        let model = model.reduce(WizardAction::Advance);
        let model = model.reduce(WizardAction::SetGroupSize(9));
        assert_eq!(model.pending, Some((1, WizardEvent::Submitted(draft))));
        assert!(model.state.submitted);
    }
}
