pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod holiday {
        pub mod holidayerror;
        pub mod holiday;
        pub mod monthdayholiday;
        pub mod dayofweekholiday;
        pub mod dayofweekinmonthholiday;
        pub mod westerneasterholiday;
        pub mod relativeholiday;
        pub mod yearrangeholiday;
        pub mod punctualholiday;
        pub mod movedholiday;
        pub mod shiftingstrategy;
        pub mod shiftedholiday;
    }

    pub mod holidays {
        pub mod worldeventholidays;
        pub mod westernchristianholidays;
        pub mod americanholidays;
        pub mod unitedkingdomholidays;
        pub mod nationalholidays;
    }

    pub mod calendar {
        pub mod calendarerror;
        pub mod holidaycalendar;
        pub mod calendar;
        pub mod standardcalendar;
    }
}
