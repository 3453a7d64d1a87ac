pub mod appointment_reminders;
