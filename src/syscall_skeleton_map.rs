use std::{collections::HashMap, sync::LazyLock};

use crate::types::{Abi, ArgRule};

// keyed by syscall name so one table serves every arch's numbering
pub static LINUX_SKELETONS: LazyLock<HashMap<&'static str, ArgRule>> =
    LazyLock::new(|| initialize_skeletons_map(false));
pub static LINUX32_SKELETONS: LazyLock<HashMap<&'static str, ArgRule>> =
    LazyLock::new(|| initialize_skeletons_map(true));

pub fn initialize_skeletons_map(linux32: bool) -> HashMap<&'static str, ArgRule> {
    use ArgRule::*;
    let mut array: Vec<(&'static str, ArgRule)> = vec![
        ("clock_gettime", Clock_Id),
        ("clock_settime", Clock_Id),
        ("clock_getres", Clock_Id),
        ("timer_create", Clock_Id),
        ("clock_nanosleep", Clock_Nanosleep),
        ("kill", Signal_Second),
        ("tkill", Signal_Second),
        ("rt_sigqueueinfo", Signal_Second),
        ("tgkill", Signal_Third),
        ("rt_tgsigqueueinfo", Signal_Third),
        ("rt_sigaction", Signal_First),
        ("getitimer", Itimer_Which),
        ("setitimer", Itimer_Which),
        ("rt_sigprocmask", Sigprocmask_How),
        // only present in the i386 table
        ("sigprocmask", Sigprocmask_How),
    ];
    if linux32 {
        array.extend([
            ("clock_gettime64", Clock_Id),
            ("clock_settime64", Clock_Id),
            ("clock_getres_time64", Clock_Id),
            ("signal", Signal_First),
            ("sigaction", Signal_First),
            // the plain variants take a 32 bit length in a single slot
            ("truncate64", Truncate),
            ("ftruncate64", Truncate),
        ]);
    } else {
        array.extend([("truncate", Truncate), ("ftruncate", Truncate)]);
    }
    array.into_iter().collect()
}

pub fn rule_for(abi: Abi, syscall_name: &str) -> Option<ArgRule> {
    let skeletons: &HashMap<&'static str, ArgRule> = if abi.is_linux32() {
        &LINUX32_SKELETONS
    } else {
        &LINUX_SKELETONS
    };
    skeletons.get(syscall_name).copied()
}
