mod appointment;
