use liars_dice::{DicePools, FaceCounts, GameError, Penalty};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn initialize_rolls_every_hand() {
    let mut rng = SmallRng::seed_from_u64(5);
    let (pools, counts) = DicePools::initialize(&mut rng, 4, 5);
    assert_eq!(pools.active_players(), vec![0, 1, 2, 3]);
    assert_eq!(pools.total_dice(), 20);
    assert_eq!(counts.total(), 20);
    assert_eq!(counts, FaceCounts::from_dice(&pools.aggregate()));
    for p in 0..4 {
        assert_eq!(pools.dice(p).len(), 5);
        assert!(pools.dice(p).iter().all(|d| (1..=6).contains(d)));
    }
}

#[test]
fn eliminate_drops_dice_from_aggregate() {
    let mut pools = DicePools::from_hands([(0, vec![1, 2]), (1, vec![3]), (2, vec![4, 5, 6])]);
    assert_eq!(pools.aggregate(), vec![1, 2, 3, 4, 5, 6]);

    assert_eq!(pools.eliminate(1), Ok(vec![3]));
    assert!(!pools.is_active(1));
    assert!(pools.dice(1).is_empty());
    assert_eq!(pools.aggregate(), vec![1, 2, 4, 5, 6]);
    assert_eq!(pools.active_players(), vec![0, 2]);
    assert_eq!(pools.eliminate(1), Err(GameError::InactivePlayer(1)));
}

#[test]
fn empty_hands_are_not_seated() {
    let pools = DicePools::from_hands([(0, vec![]), (1, vec![2])]);
    assert_eq!(pools.active_count(), 1);
    assert!(!pools.is_active(0));
}

#[test]
fn special_penalty_removes_one_die() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut pools = DicePools::from_hands([(0, vec![3, 3, 3]), (1, vec![2])]);

    assert_eq!(
        pools.apply_special_penalty(&mut rng, 0),
        Ok(Penalty::DieLost { die: 3, remaining: 2 })
    );
    assert_eq!(pools.total_dice(), 3);

    assert_eq!(
        pools.apply_special_penalty(&mut rng, 1),
        Ok(Penalty::Eliminated { die: 2 })
    );
    assert_eq!(pools.active_players(), vec![0]);
    assert_eq!(
        pools.apply_special_penalty(&mut rng, 1),
        Err(GameError::InactivePlayer(1))
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Each penalty takes exactly one die and the player leaves exactly once, at zero.
    #[test]
    fn special_penalty_conserves_dice(seed in any::<u64>(), players in 2..6usize, dice in 1..8usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (mut pools, _) = DicePools::initialize(&mut rng, players, dice);
        let others = pools.total_dice() - dice;

        let mut eliminations = 0;
        for expected_left in (0..dice).rev() {
            let before = pools.dice(0).to_vec();
            match pools.apply_special_penalty(&mut rng, 0).unwrap() {
                Penalty::DieLost { die, remaining } => {
                    prop_assert_eq!(remaining, expected_left);
                    prop_assert!(before.contains(&die));
                    prop_assert_eq!(pools.dice(0).len(), expected_left);
                }
                Penalty::Eliminated { die } => {
                    prop_assert_eq!(expected_left, 0);
                    prop_assert_eq!(before, vec![die]);
                    eliminations += 1;
                }
            }
            prop_assert_eq!(pools.total_dice(), others + expected_left);
        }
        prop_assert_eq!(eliminations, 1);
        prop_assert!(!pools.is_active(0));
        prop_assert_eq!(pools.active_count(), players - 1);
    }
}
