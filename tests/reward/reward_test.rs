// tests/reward/reward_test.rs
use trellis::env::{Episode, JoinAction};
use trellis::plan::JoinPlan;
use trellis::query::parse;
use trellis::reward::{order_index, reward, BenchedQuery, BenchmarkBounds, RewardError};

fn plan_starting_with(left: usize, right: usize) -> JoinPlan {
    let mut plan = JoinPlan::new();
    plan.record(left, right);
    plan
}

#[test]
fn test_order_index_for_each_first_pair() {
    assert_eq!(order_index(&plan_starting_with(0, 1)), Ok(0));
    assert_eq!(order_index(&plan_starting_with(0, 2)), Ok(1));
    assert_eq!(order_index(&plan_starting_with(1, 2)), Ok(2));
}

#[test]
fn test_order_index_ignores_later_joins() {
    let mut plan = plan_starting_with(0, 2);
    plan.record(0, 1);

    assert_eq!(order_index(&plan), Ok(1));
}

#[test]
fn test_order_index_rejects_wider_queries() {
    assert_eq!(
        order_index(&plan_starting_with(0, 3)),
        Err(RewardError::UnknownJoinOrder { left: 0, right: 3 })
    );
}

#[test]
fn test_order_index_rejects_empty_plan() {
    assert_eq!(order_index(&JoinPlan::new()), Err(RewardError::EmptyPlan));
}

#[test]
fn test_reward_at_the_extremes() {
    let benched = BenchedQuery::new([10.0, 20.0, 30.0]);
    let bounds = BenchmarkBounds::new(10.0, 30.0);

    // Slowest order scores zero penalty, fastest the full -10.
    assert_eq!(reward(2, &benched, &bounds).unwrap(), 0.0);
    assert_eq!(reward(0, &benched, &bounds).unwrap(), -10.0);
}

#[test]
fn test_reward_in_between() {
    let benched = BenchedQuery::new([10.0, 20.0, 30.0]);
    let bounds = BenchmarkBounds::new(10.0, 30.0);

    let expected = -(10.0_f64.sqrt() / 20.0_f64.sqrt() * 10.0);
    let got = reward(1, &benched, &bounds).unwrap();
    assert!((got - expected).abs() < 1e-12);
}

#[test]
fn test_reward_rejects_degenerate_bounds() {
    let benched = BenchedQuery::new([10.0, 20.0, 30.0]);

    assert_eq!(
        reward(0, &benched, &BenchmarkBounds::new(5.0, 5.0)),
        Err(RewardError::DegenerateBenchmark {
            min_exec_t: 5.0,
            max_exec_t: 5.0
        })
    );
    assert!(reward(0, &benched, &BenchmarkBounds::new(30.0, 10.0)).is_err());
}

#[test]
fn test_reward_rejects_out_of_range_order() {
    let benched = BenchedQuery::new([10.0, 20.0, 30.0]);
    let bounds = BenchmarkBounds::new(10.0, 30.0);

    assert_eq!(
        reward(3, &benched, &bounds),
        Err(RewardError::OrderOutOfRange(3))
    );
}

#[test]
fn test_bounds_from_reference_set() {
    let queries = vec![
        BenchedQuery::new([10.0, 20.0, 30.0]),
        BenchedQuery::new([5.0, 15.0, 25.0]),
    ];

    let bounds = BenchmarkBounds::from_queries(&queries).unwrap();
    assert_eq!(bounds.min_exec_t, 5.0);
    assert_eq!(bounds.max_exec_t, 30.0);
    assert_eq!(bounds.span(), 25.0);

    assert_eq!(BenchmarkBounds::from_queries(&[]), None);
}

#[test]
fn test_benched_query_json_round_trip() {
    let benched = BenchedQuery::from_json(r#"{"execution_times":[10.0,20.0,30.0]}"#).unwrap();
    assert_eq!(benched, BenchedQuery::new([10.0, 20.0, 30.0]));

    let json = benched.to_json().unwrap();
    assert_eq!(BenchedQuery::from_json(&json).unwrap(), benched);
}

#[test]
fn test_episode_scored_end_to_end() {
    // All three patterns pairwise share a variable, so any first pair is
    // playable.
    let query = parse("0,-1,-2;-1,5,-3;-2,5,-1;").unwrap();
    let mut episode = Episode::new(&query);

    episode.apply(JoinAction::new(1, 2)).unwrap();
    episode.apply(JoinAction::new(0, 1)).unwrap();
    assert!(episode.is_done());

    let order = order_index(episode.plan()).unwrap();
    assert_eq!(order, 2);

    let benched = BenchedQuery::new([10.0, 20.0, 30.0]);
    let bounds = BenchmarkBounds::new(10.0, 30.0);
    assert_eq!(reward(order, &benched, &bounds).unwrap(), 0.0);
}
