use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUDGET_PER_PERSON, MIN_BUDGET_PER_PERSON, MIN_GROUP_SIZE};
use crate::validation::all_filled;

/// Steps of the group trip questionnaire, in order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Size,
    Celebration,
    Budget,
    Procedures,
    Coordinator,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Size,
        Step::Celebration,
        Step::Budget,
        Step::Procedures,
        Step::Coordinator,
    ];

    /// 1-based position shown in the progress header.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn index(self) -> usize {
        match self {
            Step::Size => 0,
            Step::Celebration => 1,
            Step::Budget => 2,
            Step::Procedures => 3,
            Step::Coordinator => 4,
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Step::ALL[i])
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Size => "How many are travelling?",
            Step::Celebration => "What are you celebrating?",
            Step::Budget => "Budget per person",
            Step::Procedures => "What is everyone interested in?",
            Step::Coordinator => "Who is the trip coordinator?",
        }
    }
}

/// Sentinel-aware selection rules shared by the celebration and procedure pickers.
pub trait Tag: Copy + Ord {
    fn is_sentinel(self) -> bool;
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CelebrationTag {
    Birthday,
    Bachelorette,
    Divorce,
    Graduation,
    GirlsTrip,
    Anniversary,
    Custom,
    None,
}

impl CelebrationTag {
    pub const ALL: [CelebrationTag; 8] = [
        CelebrationTag::Birthday,
        CelebrationTag::Bachelorette,
        CelebrationTag::Divorce,
        CelebrationTag::Graduation,
        CelebrationTag::GirlsTrip,
        CelebrationTag::Anniversary,
        CelebrationTag::Custom,
        CelebrationTag::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CelebrationTag::Birthday => "Birthday",
            CelebrationTag::Bachelorette => "Bachelorette",
            CelebrationTag::Divorce => "Divorce party",
            CelebrationTag::Graduation => "Graduation",
            CelebrationTag::GirlsTrip => "Girls' trip",
            CelebrationTag::Anniversary => "Anniversary",
            CelebrationTag::Custom => "Something else",
            CelebrationTag::None => "Just because",
        }
    }
}

impl Tag for CelebrationTag {
    fn is_sentinel(self) -> bool {
        matches!(self, CelebrationTag::Custom | CelebrationTag::None)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProcedureTag {
    Dental,
    Cosmetic,
    Skin,
    Hair,
    BodyContouring,
    Wellness,
    InnerBeauty,
}

impl ProcedureTag {
    pub const ALL: [ProcedureTag; 7] = [
        ProcedureTag::Dental,
        ProcedureTag::Cosmetic,
        ProcedureTag::Skin,
        ProcedureTag::Hair,
        ProcedureTag::BodyContouring,
        ProcedureTag::Wellness,
        ProcedureTag::InnerBeauty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProcedureTag::Dental => "Dental & smile",
            ProcedureTag::Cosmetic => "Cosmetic surgery",
            ProcedureTag::Skin => "Skin & injectables",
            ProcedureTag::Hair => "Hair restoration",
            ProcedureTag::BodyContouring => "Body contouring",
            ProcedureTag::Wellness => "Spa & wellness",
            ProcedureTag::InnerBeauty => "Inner beauty only (no procedures)",
        }
    }
}

impl Tag for ProcedureTag {
    fn is_sentinel(self) -> bool {
        matches!(self, ProcedureTag::InnerBeauty)
    }
}

/// Toggles `tag` in `selected`, keeping sentinels exclusive.
pub fn toggle_tag<T: Tag>(selected: &BTreeSet<T>, tag: T) -> BTreeSet<T> {
    if tag.is_sentinel() {
        if selected.len() == 1 && selected.contains(&tag) {
            return BTreeSet::new();
        }
        return BTreeSet::from([tag]);
    }

    let mut next: BTreeSet<T> = selected.iter().copied().filter(|t| !t.is_sentinel()).collect();
    if !next.remove(&tag) {
        next.insert(tag);
    }
    next
}

/// Group discount in whole percent for a given head count.
pub fn compute_group_discount(group_size: u32) -> u32 {
    match group_size {
        0..=3 => 0,
        4..=5 => 5,
        6..=9 => 10,
        10..=14 => 15,
        _ => 20,
    }
}

/// Smallest larger group that unlocks a better discount, with that discount.
pub fn next_discount_tier(group_size: u32) -> Option<(u32, u32)> {
    let current = compute_group_discount(group_size);
    [4, 6, 10, 15]
        .into_iter()
        .filter(|&size| size > group_size)
        .map(|size| (size, compute_group_discount(size)))
        .find(|&(_, pct)| pct > current)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BudgetEstimate {
    pub subtotal: u64,
    pub discount_percent: u32,
    pub savings: u64,
    pub total: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GroupBookingDraft {
    pub group_size: u32,
    pub celebrations: BTreeSet<CelebrationTag>,
    pub custom_celebration: String,
    pub budget_per_person: u32,
    pub procedures: BTreeSet<ProcedureTag>,
    pub coordinator_name: String,
    pub coordinator_email: String,
    pub coordinator_phone: String,
    pub gift_booking: bool,
}

impl Default for GroupBookingDraft {
    fn default() -> Self {
        Self {
            group_size: MIN_GROUP_SIZE,
            celebrations: BTreeSet::new(),
            custom_celebration: String::new(),
            budget_per_person: DEFAULT_BUDGET_PER_PERSON,
            procedures: BTreeSet::new(),
            coordinator_name: String::new(),
            coordinator_email: String::new(),
            coordinator_phone: String::new(),
            gift_booking: false,
        }
    }
}

impl GroupBookingDraft {
    pub fn is_step_complete(&self, step: Step) -> bool {
        match step {
            Step::Size => self.group_size >= MIN_GROUP_SIZE,
            Step::Celebration => {
                if self.celebrations.contains(&CelebrationTag::Custom) {
                    !self.custom_celebration.trim().is_empty()
                } else {
                    !self.celebrations.is_empty()
                }
            }
            Step::Budget => self.budget_per_person >= MIN_BUDGET_PER_PERSON,
            Step::Procedures => !self.procedures.is_empty(),
            Step::Coordinator => all_filled(&[
                &self.coordinator_name,
                &self.coordinator_email,
                &self.coordinator_phone,
            ]),
        }
    }

    pub fn discount_percent(&self) -> u32 {
        compute_group_discount(self.group_size)
    }

    pub fn estimate(&self) -> BudgetEstimate {
        let subtotal = u64::from(self.group_size) * u64::from(self.budget_per_person);
        let discount_percent = self.discount_percent();
        let savings = subtotal * u64::from(discount_percent) / 100;
        BudgetEstimate {
            subtotal,
            discount_percent,
            savings,
            total: subtotal - savings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SetGroupSize(u32),
    ToggleCelebration(CelebrationTag),
    SetCustomCelebration(String),
    SetBudget(u32),
    ToggleProcedure(ProcedureTag),
    SetCoordinatorName(String),
    SetCoordinatorEmail(String),
    SetCoordinatorPhone(String),
    SetGiftBooking(bool),
    Advance,
    Retreat,
}

/// Things the wizard asks its caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Submitted(GroupBookingDraft),
    Exited,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub draft: GroupBookingDraft,
    pub submitted: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Size,
            draft: GroupBookingDraft::default(),
            submitted: false,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_advance(&self) -> bool {
        !self.submitted && self.draft.is_step_complete(self.step)
    }

    pub fn progress_percent(&self) -> u32 {
        if self.submitted {
            return 100;
        }
        (self.step.index() as u32 * 100) / Step::ALL.len() as u32
    }

    /// Applies `action`, returning the next state and an event for the caller, if any.
    pub fn reduce(&self, action: WizardAction) -> (WizardState, Option<WizardEvent>) {
        if self.submitted {
            return (self.clone(), None);
        }

        let mut next = self.clone();
        let draft = &mut next.draft;

        match action {
            WizardAction::SetGroupSize(size) => draft.group_size = size,
            WizardAction::ToggleCelebration(tag) => {
                draft.celebrations = toggle_tag(&draft.celebrations, tag);
            }
            WizardAction::SetCustomCelebration(text) => draft.custom_celebration = text,
            WizardAction::SetBudget(budget) => draft.budget_per_person = budget,
            WizardAction::ToggleProcedure(tag) => {
                draft.procedures = toggle_tag(&draft.procedures, tag);
            }
            WizardAction::SetCoordinatorName(name) => draft.coordinator_name = name,
            WizardAction::SetCoordinatorEmail(email) => draft.coordinator_email = email,
            WizardAction::SetCoordinatorPhone(phone) => draft.coordinator_phone = phone,
            WizardAction::SetGiftBooking(gift) => draft.gift_booking = gift,
            WizardAction::Advance => {
                if !self.can_advance() {
                    log::debug!("step {:?} incomplete, staying put", self.step);
                    return (self.clone(), None);
                }
                match self.step.next() {
                    Some(step) => {
                        log::debug!("questionnaire step {:?} -> {:?}", self.step, step);
                        next.step = step;
                    }
                    None => {
                        next.submitted = true;
                        log::info!(
                            "group questionnaire submitted: {} travellers, {}% discount",
                            next.draft.group_size,
                            next.draft.discount_percent()
                        );
                        return (next.clone(), Some(WizardEvent::Submitted(next.draft)));
                    }
                }
            }
            WizardAction::Retreat => match self.step.previous() {
                Some(step) => next.step = step,
                None => return (next, Some(WizardEvent::Exited)),
            },
        }

        (next, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: WizardState, actions: Vec<WizardAction>) -> (WizardState, Vec<WizardEvent>) {
        let mut events = Vec::new();
        let state = actions.into_iter().fold(state, |s, a| {
            let (next, event) = s.reduce(a);
            events.extend(event);
            next
        });
        (state, events)
    }

    fn filled_through_procedures() -> WizardState {
        let (state, _) = apply(
            WizardState::new(),
            vec![
                WizardAction::SetGroupSize(6),
                WizardAction::Advance,
                WizardAction::ToggleCelebration(CelebrationTag::Birthday),
                WizardAction::Advance,
                WizardAction::SetBudget(2500),
                WizardAction::Advance,
                WizardAction::ToggleProcedure(ProcedureTag::Dental),
                WizardAction::Advance,
            ],
        );
        state
    }

    #[test]
    fn test_discount_table() {
        let table = [
            (0, 0), (3, 0), (4, 5), (5, 5), (6, 10), (9, 10),
            (10, 15), (14, 15), (15, 20), (100, 20), (u32::MAX, 20),
        ];
        for (size, pct) in table {
            assert_eq!(compute_group_discount(size), pct, "size {}", size);
        }
    }

    #[test]
    fn test_discount_is_monotonic() {
        for size in 0..200 {
            assert!(compute_group_discount(size) <= compute_group_discount(size + 1));
        }
    }

    #[test]
    fn test_next_discount_tier() {
        assert_eq!(next_discount_tier(2), Some((4, 5)));
        assert_eq!(next_discount_tier(5), Some((6, 10)));
        assert_eq!(next_discount_tier(12), Some((15, 20)));
        assert_eq!(next_discount_tier(15), None);
    }

    #[test]
    fn test_sentinel_toggle_twice_is_empty() {
        let once = toggle_tag(&BTreeSet::new(), CelebrationTag::None);
        assert_eq!(once, BTreeSet::from([CelebrationTag::None]));
        assert!(toggle_tag(&once, CelebrationTag::None).is_empty());

        let once = toggle_tag(&BTreeSet::new(), ProcedureTag::InnerBeauty);
        assert!(toggle_tag(&once, ProcedureTag::InnerBeauty).is_empty());
    }

    #[test]
    fn test_sentinel_replaces_selection() {
        let selected = BTreeSet::from([CelebrationTag::Birthday, CelebrationTag::Graduation]);
        assert_eq!(
            toggle_tag(&selected, CelebrationTag::Custom),
            BTreeSet::from([CelebrationTag::Custom])
        );
        let custom = BTreeSet::from([CelebrationTag::Custom]);
        assert_eq!(
            toggle_tag(&custom, CelebrationTag::None),
            BTreeSet::from([CelebrationTag::None])
        );
    }

    #[test]
    fn test_regular_tag_clears_sentinel() {
        let selected = BTreeSet::from([ProcedureTag::InnerBeauty]);
        assert_eq!(
            toggle_tag(&selected, ProcedureTag::Skin),
            BTreeSet::from([ProcedureTag::Skin])
        );

        let regular = BTreeSet::from([ProcedureTag::Skin, ProcedureTag::Hair]);
        assert_eq!(
            toggle_tag(&regular, ProcedureTag::Skin),
            BTreeSet::from([ProcedureTag::Hair])
        );
    }

    #[test]
    fn test_advance_blocked_until_group_size_valid() {
        let (state, events) = apply(
            WizardState::new(),
            vec![WizardAction::SetGroupSize(1), WizardAction::Advance, WizardAction::Advance],
        );
        assert_eq!(state.step, Step::Size);
        assert!(events.is_empty());

        let before = state.clone();
        let (after, event) = before.reduce(WizardAction::Advance);
        assert_eq!(after, before);
        assert_eq!(event, None);

        let (state, _) = apply(state, vec![WizardAction::SetGroupSize(2), WizardAction::Advance]);
        assert_eq!(state.step, Step::Celebration);
    }

    #[test]
    fn test_custom_celebration_needs_text() {
        let (state, _) = apply(
            WizardState::new(),
            vec![
                WizardAction::Advance,
                WizardAction::ToggleCelebration(CelebrationTag::Custom),
                WizardAction::SetCustomCelebration("   ".to_string()),
                WizardAction::Advance,
            ],
        );
        assert_eq!(state.step, Step::Celebration);

        let (state, _) = apply(
            state,
            vec![
                WizardAction::SetCustomCelebration("Promotion party".to_string()),
                WizardAction::Advance,
            ],
        );
        assert_eq!(state.step, Step::Budget);
    }

    #[test]
    fn test_budget_minimum() {
        let (state, _) = apply(
            WizardState::new(),
            vec![
                WizardAction::Advance,
                WizardAction::ToggleCelebration(CelebrationTag::GirlsTrip),
                WizardAction::Advance,
                WizardAction::SetBudget(799),
                WizardAction::Advance,
            ],
        );
        assert_eq!(state.step, Step::Budget);
        let (state, _) = apply(state, vec![WizardAction::SetBudget(800), WizardAction::Advance]);
        assert_eq!(state.step, Step::Procedures);
    }

    #[test]
    fn test_submit_emits_draft_once() {
        let (state, events) = apply(
            filled_through_procedures(),
            vec![
                WizardAction::SetCoordinatorName("Dana".to_string()),
                WizardAction::SetCoordinatorEmail("dana@example.com".to_string()),
                WizardAction::Advance,
                WizardAction::SetCoordinatorPhone("+1 555 000 1111".to_string()),
                WizardAction::SetGiftBooking(true),
                WizardAction::Advance,
                WizardAction::Advance,
                WizardAction::Retreat,
            ],
        );

        assert!(state.submitted);
        assert_eq!(state.progress_percent(), 100);
        assert_eq!(events.len(), 1);
        match &events[0] {
            WizardEvent::Submitted(draft) => {
                assert_eq!(draft.group_size, 6);
                assert!(draft.gift_booking);
                assert_eq!(draft.coordinator_name, "Dana");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_retreat() {
        let state = filled_through_procedures();
        assert_eq!(state.step, Step::Coordinator);
        let (state, events) = apply(
            state,
            vec![
                WizardAction::Retreat,
                WizardAction::Retreat,
                WizardAction::Retreat,
                WizardAction::Retreat,
            ],
        );
        assert_eq!(state.step, Step::Size);
        assert!(events.is_empty());
        // Selections survive going back.
        assert_eq!(state.draft.budget_per_person, 2500);

        let (_, event) = state.reduce(WizardAction::Retreat);
        assert_eq!(event, Some(WizardEvent::Exited));
    }

    #[test]
    fn test_estimate() {
        let draft = GroupBookingDraft {
            group_size: 6,
            budget_per_person: 2500,
            ..GroupBookingDraft::default()
        };
        assert_eq!(
            draft.estimate(),
            BudgetEstimate {
                subtotal: 15_000,
                discount_percent: 10,
                savings: 1_500,
                total: 13_500,
            }
        );
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Size.previous(), None);
        assert_eq!(Step::Size.next(), Some(Step::Celebration));
        assert!(Step::Coordinator.is_last());
        assert_eq!(Step::Budget.number(), 3);
    }
}
