mod fn_objective;
