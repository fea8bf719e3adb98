use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::plan::{Plan, PlanId};
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::errors::{EngineError, EngineResult, Entity};

/// Hires a plan for the session. At most one subscription may be active at
/// a time; the invariant is enforced here rather than trusted to callers.
pub fn hire(
    subscriptions: &mut Vec<Subscription>,
    plan: &Plan,
    now: DateTime<Utc>,
) -> EngineResult<Subscription> {
    if subscriptions.iter().any(Subscription::is_active) {
        return Err(EngineError::Conflict);
    }

    let subscription = Subscription {
        id: Uuid::new_v4(),
        plan_id: plan.id.clone(),
        plan_name: plan.name.clone(),
        status: SubscriptionStatus::Active,
        started_at: now,
        ends_at: now + Duration::days(plan.billing_period.duration_days()),
        paid_amount: plan.price,
    };
    subscriptions.push(subscription.clone());
    Ok(subscription)
}

pub fn active(subscriptions: &[Subscription]) -> Vec<&Subscription> {
    subscriptions.iter().filter(|subscription| subscription.is_active()).collect()
}

/// Cancels the active subscription for the given plan id. The record stays
/// in the session history but drops out of `active`; there is no path back
/// to active, a fresh hire creates a new subscription.
pub fn cancel(subscriptions: &mut [Subscription], plan_id: &PlanId) -> EngineResult<Subscription> {
    let subscription = subscriptions
        .iter_mut()
        .find(|subscription| subscription.is_active() && &subscription.plan_id == plan_id)
        .ok_or(EngineError::NotFound(Entity::Subscription))?;

    subscription.status = SubscriptionStatus::Cancelled;
    Ok(subscription.clone())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use crate::catalog::seed;
    use crate::domain::plan::PlanId;
    use crate::errors::{EngineError, Entity};

    use super::{active, cancel, hire};

    fn id(raw: &str) -> PlanId {
        PlanId(raw.to_owned())
    }

    #[test]
    fn monthly_plan_runs_exactly_thirty_days() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        let sub = hire(&mut subs, catalog.plan(&id("1")).unwrap(), now).unwrap();
        assert_eq!(sub.ends_at - sub.started_at, Duration::days(30));
        assert_eq!(sub.paid_amount, Decimal::new(39_90, 2));
    }

    #[test]
    fn annual_plan_runs_exactly_one_year() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        let sub = hire(&mut subs, catalog.plan(&id("4")).unwrap(), now).unwrap();
        assert_eq!(sub.ends_at - sub.started_at, Duration::days(365));
    }

    #[test]
    fn second_active_hire_conflicts() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        hire(&mut subs, catalog.plan(&id("1")).unwrap(), now).unwrap();
        assert_eq!(
            hire(&mut subs, catalog.plan(&id("2")).unwrap(), now),
            Err(EngineError::Conflict)
        );
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn cancel_removes_from_active_set_but_keeps_history() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        hire(&mut subs, catalog.plan(&id("2")).unwrap(), now).unwrap();
        assert_eq!(active(&subs).len(), 1);

        cancel(&mut subs, &id("2")).unwrap();
        assert!(active(&subs).is_empty());
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn cancel_unknown_or_already_cancelled_is_not_found() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        assert_eq!(
            cancel(&mut subs, &id("9")),
            Err(EngineError::NotFound(Entity::Subscription))
        );

        hire(&mut subs, catalog.plan(&id("3")).unwrap(), now).unwrap();
        cancel(&mut subs, &id("3")).unwrap();
        assert_eq!(
            cancel(&mut subs, &id("3")),
            Err(EngineError::NotFound(Entity::Subscription))
        );
    }

    #[test]
    fn rehire_after_cancel_creates_a_fresh_subscription() {
        let catalog = seed();
        let mut subs = Vec::new();
        let now = Utc::now();

        let first = hire(&mut subs, catalog.plan(&id("1")).unwrap(), now).unwrap();
        cancel(&mut subs, &id("1")).unwrap();
        let second = hire(&mut subs, catalog.plan(&id("1")).unwrap(), now).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(subs.len(), 2);
        assert_eq!(active(&subs).len(), 1);
    }
}
