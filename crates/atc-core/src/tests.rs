//! Unit tests for atc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, AgentKind, Identity};

    #[test]
    fn kind_labels() {
        assert_eq!(AgentKind::Plane.as_str(), "plane");
        assert_eq!(AgentKind::Dispatcher.to_string(), "dispatcher");
    }

    #[test]
    fn identity_display_is_queue_name() {
        let id = Identity::new(AgentKind::Plane, "7421");
        assert_eq!(id.to_string(), "plane.7421");
    }

    #[test]
    fn system_identity() {
        let sys = Identity::system();
        assert_eq!(sys.kind, AgentKind::System);
        assert_eq!(sys.id, AgentId::new("system"));
        assert_eq!(sys.to_string(), "system.system");
    }
}

#[cfg(test)]
mod vec2 {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Vec2;

    const EPS: f32 = 1e-5;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn distances() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < EPS);
        assert!((a.distance_squared(b) - 25.0).abs() < EPS);
    }

    #[test]
    fn headings() {
        let origin = Vec2::ZERO;
        assert!((origin.angle_to(Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < EPS);
        assert!((origin.angle_to(Vec2::new(-1.0, 0.0)) - PI).abs() < EPS);
        // From (1, 0) the origin lies in the -x direction.
        assert!((Vec2::new(1.0, 0.0).angle_to_origin() - PI).abs() < EPS);
    }

    #[test]
    fn from_angle_is_unit() {
        for i in 0..8 {
            let a = i as f32 * PI / 4.0;
            let v = Vec2::from_angle(a);
            assert!((v.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn in_range_is_inclusive() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert!(a.in_range(b, 10.0));
        assert!(!a.in_range(b, 9.99));
    }
}

#[cfg(test)]
mod status {
    use crate::{PlaneStatus, WeatherKind};

    #[test]
    fn terminal_states() {
        assert!(PlaneStatus::Landed.is_terminal());
        assert!(PlaneStatus::Crashed.is_terminal());
        assert!(!PlaneStatus::Approaching.is_terminal());
        assert!(!PlaneStatus::Landing.is_terminal());
    }

    #[test]
    fn log_codes_are_stable() {
        assert_eq!(PlaneStatus::Approaching.code(), 0);
        assert_eq!(PlaneStatus::ExitingQueue.code(), 3);
        assert_eq!(PlaneStatus::Landed.code(), 6);
        assert_eq!(PlaneStatus::Crashed.code(), 7);
    }

    #[test]
    fn weather_steps_saturate() {
        assert_eq!(WeatherKind::Clear.lowered(), WeatherKind::Clear);
        assert_eq!(WeatherKind::Storm.raised(), WeatherKind::Storm);
        assert_eq!(WeatherKind::Clear.raised(), WeatherKind::Clouds);
        assert_eq!(WeatherKind::Storm.lowered(), WeatherKind::Fog);
    }

    #[test]
    fn accident_table() {
        assert_eq!(WeatherKind::Clear.accident_probability(), 0.00010);
        assert_eq!(WeatherKind::Storm.accident_probability(), 0.00035);
        // Fog is the hole in the table.
        assert_eq!(WeatherKind::Fog.accident_probability(), 0.0);
    }
}

#[cfg(test)]
mod range {
    use crate::Bounds;

    #[test]
    fn open_excludes_endpoints() {
        let b = Bounds::open(0.0, 10.0);
        assert!(!b.contains(0.0));
        assert!(!b.contains(10.0));
        assert!(b.contains(5.0));
    }

    #[test]
    fn closed_includes_endpoints() {
        let b = Bounds::closed(1.0, 10.0);
        assert!(b.contains(1.0));
        assert!(b.contains(10.0));
        assert!(!b.contains(10.1));
    }

    #[test]
    fn half_open_variants() {
        assert!(Bounds::closed_left(0.0, 1.0).contains(0.0));
        assert!(!Bounds::closed_left(0.0, 1.0).contains(1.0));
        assert!(!Bounds::closed_right(0.0, 1.0).contains(0.0));
        assert!(Bounds::closed_right(0.0, 1.0).contains(1.0));
    }

    #[test]
    fn above_is_unbounded() {
        let b = Bounds::above(0.0);
        assert!(!b.contains(0.0));
        assert!(b.contains(1e30));
    }

    #[test]
    fn check_reports_offending_value() {
        let err = Bounds::closed_right(0.0, 10.0).check("time step", 12.0).unwrap_err();
        assert_eq!(err.to_string(), "time step must be in range (0, 10] but got 12");
    }

    #[test]
    fn check_passes_value_through() {
        assert_eq!(Bounds::closed(0.0, 1.0).check("p", 0.5), Ok(0.5));
    }
}

#[cfg(test)]
mod rng {
    use crate::AgentRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::seeded(12345);
        let mut r2 = AgentRng::seeded(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = AgentRng::seeded(1);
        let mut r1 = AgentRng::seeded(2);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_draw_in_bounds() {
        let mut rng = AgentRng::seeded(0);
        for _ in 0..1000 {
            let v: f32 = rng.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::seeded(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
