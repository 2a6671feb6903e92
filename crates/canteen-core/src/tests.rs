//! Unit tests for canteen-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn next_increments() {
        assert_eq!(EntityId(41).next(), EntityId(42));
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{MOORE_OFFSETS, Position};

    #[test]
    fn manhattan_distance() {
        let a = Position::new(2, 19);
        let b = Position::new(41, 5);
        assert_eq!(a.manhattan_distance(b), 39 + 14);
        assert_eq!(b.manhattan_distance(a), 53);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn step_toward_is_clipped_per_axis() {
        let from = Position::new(10, 10);
        assert_eq!(from.step_toward(Position::new(20, 3)), Position::new(11, 9));
        assert_eq!(from.step_toward(Position::new(10, 30)), Position::new(10, 11));
        assert_eq!(from.step_toward(Position::new(0, 10)), Position::new(9, 10));
    }

    #[test]
    fn step_toward_self_stays() {
        let p = Position::new(3, 4);
        assert_eq!(p.step_toward(p), p);
    }

    #[test]
    fn moore_offsets_exclude_center() {
        assert_eq!(MOORE_OFFSETS.len(), 8);
        assert!(!MOORE_OFFSETS.contains(&(0, 0)));
        assert!(MOORE_OFFSETS.iter().all(|&(dx, dy)| dx.abs() <= 1 && dy.abs() <= 1));
    }
}

#[cfg(test)]
mod zone {
    use crate::Zone;

    #[test]
    fn impassable_set() {
        assert!(!Zone::Boundary.is_passable());
        assert!(!Zone::Store.is_passable());
        assert!(!Zone::BigTable.is_passable());
        assert!(Zone::None.is_passable());
        assert!(Zone::DiningArea.is_passable());
        assert!(Zone::Exit.is_passable());
        assert!(Zone::CashierQueue.is_passable());
    }

    #[test]
    fn names() {
        assert_eq!(Zone::DiningArea.to_string(), "dining_area");
        assert_eq!(Zone::CashierQueue.as_str(), "cashier_queue");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert!(t + 1 > t);
    }

    #[test]
    fn clock_starts_at_start_time() {
        let clock = SimClock::new(480, 1);
        assert_eq!(clock.current_time(), 8.0);
        assert_eq!(clock.hour_of_day(), 8);
        assert_eq!(clock.time_string(), "08:00");
    }

    #[test]
    fn clock_advances_one_minute() {
        let mut clock = SimClock::new(480, 1);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert_eq!(clock.current_time(), 9.5);
        assert_eq!(clock.hour_of_day(), 9);
        assert_eq!(clock.time_string(), "09:30");
    }

    #[test]
    fn time_string_rolls_minutes() {
        let clock = SimClock::new(480, 1);
        assert_eq!(clock.time_string_at(Tick(59)), "08:59");
        assert_eq!(clock.time_string_at(Tick(60)), "09:00");
        assert_eq!(clock.time_string_at(Tick(599)), "17:59");
    }

    #[test]
    fn config_total_ticks() {
        let cfg = SimConfig::from_hours(8, 18, 1);
        assert_eq!(cfg.total_ticks(), 600);
        assert_eq!(cfg.end_tick(), Tick(600));
        assert_eq!(cfg.start_time(), 8.0);
        assert_eq!(cfg.end_time(), 18.0);
        let clock = cfg.make_clock();
        assert_eq!(clock.time_at(cfg.end_tick()), 18.0);
    }

    #[test]
    fn config_validation() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::from_hours(18, 8, 0).validate().is_err());
        assert!(SimConfig::from_hours(8, 8, 0).validate().is_err());
        assert!(SimConfig::from_hours(8, 25, 0).validate().is_err());
        let zero_tick = SimConfig { tick_minutes: 0, ..SimConfig::default() };
        assert!(zero_tick.validate().is_err());
        let ragged = SimConfig { tick_minutes: 7, ..SimConfig::default() };
        assert!(ragged.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, EntityId, SimRng};

    #[test]
    fn agent_rng_deterministic() {
        let mut a = AgentRng::new(42, EntityId(5));
        let mut b = AgentRng::new(42, EntityId(5));
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_entities_diverge() {
        let mut a = AgentRng::new(42, EntityId(0));
        let mut b = AgentRng::new(42, EntityId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(1, EntityId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn sim_rng_shuffle_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let mut xs: Vec<u32> = (0..32).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn child_streams_are_reproducible() {
        let mut root_a = SimRng::new(3);
        let mut root_b = SimRng::new(3);
        let mut ca = root_a.child(1);
        let mut cb = root_b.child(1);
        assert_eq!(ca.gen_range(0..u64::MAX), cb.gen_range(0..u64::MAX));
    }
}
