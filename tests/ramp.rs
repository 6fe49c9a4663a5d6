mod common;

mod tests {
    use pulse_composer::{
        AccelerationTable, Duration, FadeRamp, LogicalState, RampStep, ramp::FADE_STEPS,
    };

    use crate::common::{FADE_IN_LEVELS, FADE_OUT_LEVELS};

    fn steps(target: LogicalState, duration: u16) -> Vec<RampStep> {
        FadeRamp::new(&AccelerationTable::REFERENCE, target, duration).collect()
    }

    fn total_hold(steps: &[RampStep]) -> u64 {
        steps.iter().map(|step| step.hold.as_millis()).sum()
    }

    #[test]
    fn test_fade_in_levels() {
        let levels: Vec<u8> = steps(LogicalState::On, 2000)
            .iter()
            .map(|step| step.level)
            .collect();
        assert_eq!(levels, FADE_IN_LEVELS);
    }

    #[test]
    fn test_fade_out_levels() {
        let levels: Vec<u8> = steps(LogicalState::Off, 2000)
            .iter()
            .map(|step| step.level)
            .collect();
        assert_eq!(levels, FADE_OUT_LEVELS);
    }

    #[test]
    fn test_fade_takes_fixed_step_count() {
        assert_eq!(steps(LogicalState::On, 500).len(), usize::from(FADE_STEPS));
        assert_eq!(steps(LogicalState::Off, 500).len(), usize::from(FADE_STEPS));
    }

    #[test]
    fn test_fade_in_is_monotonic() {
        let steps = steps(LogicalState::On, 4000);
        assert!(steps.windows(2).all(|pair| pair[0].level <= pair[1].level));
        assert!(steps.windows(2).all(|pair| pair[0].step <= pair[1].step));
        assert_eq!(steps.last().map(|step| step.level), Some(127));
    }

    #[test]
    fn test_fade_out_is_monotonic() {
        let steps = steps(LogicalState::Off, 4000);
        assert!(steps.windows(2).all(|pair| pair[0].level >= pair[1].level));
        assert!(steps.windows(2).all(|pair| pair[0].step >= pair[1].step));
        assert_eq!(steps.last().map(|step| step.level), Some(0));
    }

    #[test]
    fn test_fade_in_accelerates_at_breakpoint() {
        // Level 40 reaches points[1], so the next jump is 2 levels
        let steps = steps(LogicalState::On, 2000);
        assert_eq!(steps[39].level, 39);
        assert_eq!(steps[39].step, 1);
        assert_eq!(steps[40].level, 40);
        assert_eq!(steps[40].step, 2);
        assert_eq!(steps[41].level, 42);
    }

    #[test]
    fn test_fade_out_decelerates_one_point_lower() {
        // Fading out compares against points[step - 1]: starting at step 6,
        // the first slow-down happens once the level drops to 100 or below
        let steps = steps(LogicalState::Off, 2000);
        assert_eq!(steps[0].step, 6);
        assert_eq!(steps[4].level, 103);
        assert_eq!(steps[4].step, 6);
        assert_eq!(steps[5].level, 97);
        assert_eq!(steps[5].step, 5);
        assert_eq!(steps[6].level, 92);
    }

    #[test]
    fn test_hold_times_sum_to_duration() {
        for duration in [128, 500, 2000, 2001, 2048, 4000, 32767] {
            assert_eq!(total_hold(&steps(LogicalState::On, duration)), u64::from(duration));
            assert_eq!(total_hold(&steps(LogicalState::Off, duration)), u64::from(duration));
        }
    }

    #[test]
    fn test_remainder_goes_to_leading_steps() {
        let long_hold = Duration::from_millis(32);

        // 2000 = 64 * 31 + 16
        let fade_in = steps(LogicalState::On, 2000);
        assert!(fade_in[..16].iter().all(|step| step.hold == long_hold));
        assert!(fade_in[16..].iter().all(|step| step.hold == Duration::from_millis(31)));

        // 2001 = 64 * 31 + 17
        let fade_out = steps(LogicalState::Off, 2001);
        let long = fade_out.iter().filter(|step| step.hold == long_hold).count();
        assert_eq!(long, 17);
    }

    #[test]
    fn test_divisible_duration_has_even_holds() {
        let steps = steps(LogicalState::On, 2048);
        assert!(steps.iter().all(|step| step.hold == Duration::from_millis(32)));
    }
}
