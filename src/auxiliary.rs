pub mod constants {
    pub mod sizes {
        // l_sigset_t holds 64 signal bits
        pub const L_SIGSET_SIZE: usize = 8;
        // pre-rt sigset_t is a single 32 bit word
        pub const L_OSIGSET_SIZE: usize = 4;
    }

    pub mod clock {
        pub const CLOCK_REALTIME: i32 = 0;
        pub const CLOCK_MONOTONIC: i32 = 1;
        pub const CLOCK_PROCESS_CPUTIME_ID: i32 = 2;
        pub const CLOCK_THREAD_CPUTIME_ID: i32 = 3;
        pub const CLOCK_MONOTONIC_RAW: i32 = 4;
        pub const CLOCK_REALTIME_COARSE: i32 = 5;
        pub const CLOCK_MONOTONIC_COARSE: i32 = 6;
        pub const CLOCK_BOOTTIME: i32 = 7;
        pub const CLOCK_REALTIME_ALARM: i32 = 8;
        pub const CLOCK_BOOTTIME_ALARM: i32 = 9;
        pub const CLOCK_SGI_CYCLE: i32 = 10;
        pub const CLOCK_TAI: i32 = 11;

        // dynamic cpu clocks: ~pid << 3 | perthread << 2 | which
        pub const CPUCLOCK_PROF: i32 = 0;
        pub const CPUCLOCK_VIRT: i32 = 1;
        pub const CPUCLOCK_SCHED: i32 = 2;
        pub const CLOCKFD: i32 = 3;
        pub const CPUCLOCK_CLOCK_MASK: i32 = 3;
        pub const CPUCLOCK_PERTHREAD_MASK: i32 = 4;
        pub const CLOCKFD_MASK: i32 = CPUCLOCK_PERTHREAD_MASK | CPUCLOCK_CLOCK_MASK;

        // syscall: clock_nanosleep
        pub const TIMER_ABSTIME: i32 = 1;
    }

    pub mod itimer {
        pub const ITIMER_REAL: i32 = 0;
        pub const ITIMER_VIRTUAL: i32 = 1;
        pub const ITIMER_PROF: i32 = 2;
    }

    pub mod signal {
        // linux numbering, independent of the host
        pub const SIGHUP: i32 = 1;
        pub const SIGINT: i32 = 2;
        pub const SIGQUIT: i32 = 3;
        pub const SIGILL: i32 = 4;
        pub const SIGTRAP: i32 = 5;
        pub const SIGABRT: i32 = 6;
        pub const SIGBUS: i32 = 7;
        pub const SIGFPE: i32 = 8;
        pub const SIGKILL: i32 = 9;
        pub const SIGUSR1: i32 = 10;
        pub const SIGSEGV: i32 = 11;
        pub const SIGUSR2: i32 = 12;
        pub const SIGPIPE: i32 = 13;
        pub const SIGALRM: i32 = 14;
        pub const SIGTERM: i32 = 15;
        pub const SIGSTKFLT: i32 = 16;
        pub const SIGCHLD: i32 = 17;
        pub const SIGCONT: i32 = 18;
        pub const SIGSTOP: i32 = 19;
        pub const SIGTSTP: i32 = 20;
        pub const SIGTTIN: i32 = 21;
        pub const SIGTTOU: i32 = 22;
        pub const SIGURG: i32 = 23;
        pub const SIGXCPU: i32 = 24;
        pub const SIGXFSZ: i32 = 25;
        pub const SIGVTALRM: i32 = 26;
        pub const SIGPROF: i32 = 27;
        pub const SIGWINCH: i32 = 28;
        pub const SIGIO: i32 = 29;
        pub const SIGPWR: i32 = 30;
        pub const SIGSYS: i32 = 31;
        pub const SIGRTMIN: i32 = 32;
        pub const SIGRTMAX: i32 = 64;

        // syscall: rt_sigprocmask
        pub const SIG_BLOCK: i32 = 0;
        pub const SIG_UNBLOCK: i32 = 1;
        pub const SIG_SETMASK: i32 = 2;
    }
}
